use super::{format::escape_html, layout::vertical_layout};

pub fn error_page(message: &str) -> String {
    format!(
        r#"<div class="layout">
    {layout}
    <div class="content" data-testid="error-message">
      <div class="content-header">
        <div class="content-title"> Erreur </div>
      </div>
      {message}
    </div>
  </div>"#,
        layout = vertical_layout(120),
        message = escape_html(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_message_verbatim() {
        let markup = error_page("Erreur 404");
        assert!(markup.contains("Erreur 404"));
        assert!(markup.contains(r#"data-testid="error-message""#));
    }
}
