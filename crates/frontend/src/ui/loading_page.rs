use super::layout::vertical_layout;

pub fn loading_page() -> String {
    format!(
        r#"<div class="layout">
    {layout}
    <div class="content" id="loading">Loading...</div>
  </div>"#,
        layout = vertical_layout(120),
    )
}
