use shared::domain::ExpenseType;

use super::layout::vertical_layout;

pub const EXPENSE_TYPE: &str = "expense-type";
pub const EXPENSE_NAME: &str = "expense-name";
pub const DATE: &str = "datepicker";
pub const AMOUNT: &str = "amount";
pub const VAT: &str = "vat";
pub const PCT: &str = "pct";
pub const COMMENTARY: &str = "commentary";
pub const FILE: &str = "file";

pub fn new_bill_ui() -> String {
    let options: String = ExpenseType::ALL
        .iter()
        .map(|kind| format!("\n                  <option>{}</option>", kind.label()))
        .collect();
    format!(
        r#"<div class="layout">
    {layout}
    <div class="content">
      <div class="content-header">
        <div class="content-title" data-testid="content-title"> Envoyer une note de frais </div>
      </div>
      <div class="form-newbill-container content-inner">
        <form data-testid="form-new-bill">
          <div class="row">
            <div class="col-md-6">
              <div class="col-half">
                <label for="expense-type" class="bold-label">Type de dépense</label>
                <select required class="form-control blue-border" data-testid="{EXPENSE_TYPE}">{options}
                </select>
              </div>
              <div class="col-half">
                <label for="expense-name" class="bold-label">Nom de la dépense</label>
                <input type="text" class="form-control blue-border" data-testid="{EXPENSE_NAME}" placeholder="Vol Paris Londres" />
              </div>
              <div class="col-half">
                <label for="datepicker" class="bold-label">Date</label>
                <input required type="date" class="form-control blue-border" data-testid="{DATE}" />
              </div>
              <div class="col-half">
                <label for="amount" class="bold-label">Montant TTC </label>
                <input required type="number" class="form-control blue-border input-icon input-icon-right" data-testid="{AMOUNT}" placeholder="348"/>
              </div>
              <div class="col-half-row">
                <div class="flex-col">
                  <label for="vat" class="bold-label">TVA</label>
                  <input type="number" class="form-control blue-border" data-testid="{VAT}" placeholder="70" />
                </div>
                <div class="flex-col">
                  <input required type="number" class="form-control blue-border" data-testid="{PCT}" placeholder="20" />
                </div>
              </div>
            </div>
            <div class="col-md-6">
              <div class="col-half">
                <label for="commentary" class="bold-label">Commentaire</label>
                <textarea class="form-control blue-border" data-testid="{COMMENTARY}" rows="3"></textarea>
              </div>
              <div class="col-half">
                <label for="file" class="bold-label">Justificatif</label>
                <input required type="file" accept=".jpg,.jpeg,.png" class="form-control blue-border" data-testid="{FILE}" />
              </div>
            </div>
          </div>
          <div class="row">
            <div class="col-md-6">
              <div class="col-half">
                <button type="submit" id="btn-send-bill" class="btn btn-primary">Envoyer</button>
              </div>
            </div>
          </div>
        </form>
      </div>
    </div>
  </div>"#,
        layout = vertical_layout(150),
    )
}
