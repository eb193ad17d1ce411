use crate::dom::NavIcon;

/// Left navigation bar shared by every employee page.
pub fn vertical_layout(height_vh: u32) -> String {
    format!(
        r#"<div class="vertical-navbar" style="height: {height_vh}vh;">
      <div class="layout-title"><span class="first">Bill</span><span class="second">ed</span></div>
      <div id="layout-icon1" data-testid="{window}"><span class="icon icon-window"></span></div>
      <div id="layout-icon2" data-testid="{mail}"><span class="icon icon-mail"></span></div>
    </div>"#,
        window = NavIcon::Window.test_id(),
        mail = NavIcon::Mail.test_id(),
    )
}
