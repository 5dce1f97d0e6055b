//! Visitor QR ID card document rendering
//!
//! Lays out four ID cards per Letter-portrait page: visitor details on the
//! left, photo and QR code panels on the right. Every record-derived field is
//! HTML-escaped; unlike the OTP email templates, visitor records flow through
//! here wholesale and are not treated as trusted markup.

use crate::domain::entities::visitor::Visitor;

/// Cards laid out per printed page
pub const CARDS_PER_PAGE: usize = 4;

/// Style configuration for the printed card document
///
/// Lengths are millimetres unless the field name says pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub page_size: String,
    pub page_margin_mm: f32,
    pub page_safety_mm: f32,
    pub page_gap_mm: f32,
    pub page_min_height_mm: f32,
    pub card_padding_mm: f32,
    pub card_background: String,
    pub card_border_color: String,
    pub base_text_color: String,
    pub title_font_size_px: f32,
    pub title_font_weight: u32,
    pub title_letter_spacing_px: f32,
    pub title_bottom_margin_mm: f32,
    pub left_column_font_size_px: f32,
    pub left_column_font_weight: u32,
    pub left_column_line_height: f32,
    pub left_column_row_gap_mm: f32,
    pub content_gap_mm: f32,
    pub card_border_radius_mm: f32,
    pub right_panel_background: String,
    pub right_panel_border_color: String,
    pub divider_color: String,
    pub photo_placeholder_color: String,
    pub photo_placeholder_font_size_px: f32,
    pub media_padding_mm: f32,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            page_size: "Letter portrait".to_string(),
            page_margin_mm: 8.0,
            page_safety_mm: 21.0,
            page_gap_mm: 6.0,
            page_min_height_mm: 279.0,
            card_padding_mm: 6.0,
            card_background: "#25a253".to_string(),
            card_border_color: "#0f5a2a".to_string(),
            base_text_color: "#111".to_string(),
            title_font_size_px: 18.0,
            title_font_weight: 700,
            title_letter_spacing_px: 0.5,
            title_bottom_margin_mm: 6.0,
            left_column_font_size_px: 16.0,
            left_column_font_weight: 700,
            left_column_line_height: 1.45,
            left_column_row_gap_mm: 4.0,
            content_gap_mm: 5.0,
            card_border_radius_mm: 3.0,
            right_panel_background: "#f8f8f8".to_string(),
            right_panel_border_color: "#3d3d3d".to_string(),
            divider_color: "#d1d5db".to_string(),
            photo_placeholder_color: "#3f3f46".to_string(),
            photo_placeholder_font_size_px: 20.0,
            media_padding_mm: 3.0,
        }
    }
}

impl CardLayout {
    /// The compact preset used for standard visitor ID batches
    pub fn standard_visitor() -> Self {
        Self {
            card_padding_mm: 4.0,
            left_column_font_size_px: 13.0,
            page_gap_mm: 2.0,
            title_font_size_px: 14.0,
            title_bottom_margin_mm: 2.5,
            left_column_line_height: 1.3,
            left_column_row_gap_mm: 1.8,
            content_gap_mm: 2.5,
            card_border_radius_mm: 4.0,
            media_padding_mm: 1.5,
            photo_placeholder_font_size_px: 13.0,
            ..Default::default()
        }
    }
}

/// Options for a card print run
#[derive(Debug, Clone)]
pub struct PrintCardOptions {
    /// Heading printed on every card
    pub card_title: String,
    /// HTML document title
    pub document_title: String,
    /// Label for the visited-inmate row ("PDL")
    pub context_label: String,
    /// Whether to print the relationship row
    pub show_relationship: bool,
    /// Base URL of the record service, for uploaded photo paths
    pub api_base_url: String,
    /// Style configuration
    pub layout: CardLayout,
}

impl Default for PrintCardOptions {
    fn default() -> Self {
        Self {
            card_title: "ICJ-MD VISITOR'S ID SYSTEM".to_string(),
            document_title: "Visitor QR IDs".to_string(),
            context_label: "PDL".to_string(),
            show_relationship: true,
            api_base_url: String::new(),
            layout: CardLayout::default(),
        }
    }
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Record fields default to "N/A" when absent, then get escaped.
fn field_or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => "N/A".to_string(),
    }
}

fn format_birthday(visitor: &Visitor) -> String {
    visitor
        .date_of_birth
        .map(|date| date.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn render_card(visitor: &Visitor, options: &PrintCardOptions, pdl_name: &str) -> String {
    let name = visitor.display_name();
    let name = if name.is_empty() { "N/A".to_string() } else { escape_html(&name) };

    let photo_html = match visitor.photo.as_deref() {
        Some(photo) if !photo.is_empty() => format!(
            r#"<img src="{}/uploads/{}" alt="1x1 picture" class="photo-img" />"#,
            options.api_base_url,
            escape_html(photo)
        ),
        _ => r#"<div class="photo-placeholder">1x1 picture</div>"#.to_string(),
    };

    let relationship_row = if options.show_relationship {
        format!(
            "<div><strong>Relationship:</strong> {}</div>",
            field_or_na(visitor.relationship.as_deref())
        )
    } else {
        String::new()
    };

    // The QR code was filtered on before pagination, so it is present here.
    let qr_src = visitor.qr_code.as_deref().unwrap_or_default();

    format!(
        r#"<div class="id-card">
  <div class="id-title">{title}</div>
  <div class="id-content">
    <div class="id-left">
      <div><strong>Name:</strong> {name}</div>
      <div><strong>Address:</strong> {address}</div>
      <div><strong>Birthday:</strong> {birthday}</div>
      <div><strong>{context_label}:</strong> {pdl_name}</div>
      {relationship_row}
    </div>
    <div class="id-right">
      <div class="photo-box">{photo_html}</div>
      <div class="qr-box">
        <img src="{qr_src}" alt="Visitor QR Code" class="qr-img" />
      </div>
    </div>
  </div>
</div>"#,
        title = escape_html(&options.card_title),
        name = name,
        address = field_or_na(visitor.address.as_deref()),
        birthday = escape_html(&format_birthday(visitor)),
        context_label = escape_html(&options.context_label),
        pdl_name = field_or_na(Some(pdl_name)),
        relationship_row = relationship_row,
        photo_html = photo_html,
        qr_src = escape_html(qr_src),
    )
}

fn document_css(cfg: &CardLayout) -> String {
    format!(
        r#"@page {{
  size: {page_size};
  margin: {page_margin}mm;
}}
* {{ box-sizing: border-box; }}
body {{
  margin: 0;
  font-family: Arial, sans-serif;
  color: {base_text_color};
}}
.print-page {{
  width: 100%;
  height: calc({page_min_height}mm - {double_margin}mm - {page_safety}mm);
  display: grid;
  grid-template-columns: 1fr;
  grid-template-rows: repeat(4, minmax(0, 1fr));
  gap: {page_gap}mm;
  page-break-after: always;
  align-content: stretch;
  justify-items: stretch;
}}
.print-page:last-child {{
  page-break-after: auto;
}}
.id-card {{
  border: 1px solid {card_border_color};
  background: {card_background};
  padding: {card_padding}mm;
  display: flex;
  flex-direction: column;
  min-height: 0;
  border-radius: {card_border_radius}mm;
}}
.id-card-empty {{
  background: transparent;
  border: none;
}}
.id-title {{
  font-size: {title_font_size}px;
  font-weight: {title_font_weight};
  margin-bottom: {title_bottom_margin}mm;
  letter-spacing: {title_letter_spacing}px;
}}
.id-content {{
  flex: 1;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: {content_gap}mm;
  align-items: stretch;
  min-height: 0;
}}
.id-left {{
  font-size: {left_font_size}px;
  font-weight: {left_font_weight};
  line-height: {left_line_height};
  min-height: 0;
  overflow: hidden;
}}
.id-left div {{
  margin-bottom: {left_row_gap}mm;
  word-break: break-word;
}}
.id-right {{
  border: 1px solid {right_panel_border_color};
  background: {right_panel_background};
  display: grid;
  grid-template-columns: 1fr 1fr;
  overflow: hidden;
  border-radius: 1.5mm;
  min-height: 0;
}}
.photo-box,
.qr-box {{
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 0;
  border-left: 1px solid {divider_color};
}}
.photo-box {{
  border-left: none;
  border-right: 1px solid {divider_color};
  padding: {media_padding}mm;
}}
.photo-placeholder {{
  color: {photo_placeholder_color};
  font-size: {photo_placeholder_font_size}px;
  text-align: center;
}}
.photo-img {{
  max-width: 100%;
  max-height: 100%;
  width: auto;
  height: auto;
  object-fit: cover;
}}
.qr-box {{
  padding: {media_padding}mm;
}}
.qr-img {{
  max-width: 100%;
  max-height: 100%;
  width: auto;
  height: auto;
  object-fit: contain;
}}
@media print {{
  body {{
    -webkit-print-color-adjust: exact;
    print-color-adjust: exact;
  }}
}}"#,
        page_size = cfg.page_size,
        page_margin = cfg.page_margin_mm,
        base_text_color = cfg.base_text_color,
        page_min_height = cfg.page_min_height_mm,
        double_margin = cfg.page_margin_mm * 2.0,
        page_safety = cfg.page_safety_mm,
        page_gap = cfg.page_gap_mm,
        card_border_color = cfg.card_border_color,
        card_background = cfg.card_background,
        card_padding = cfg.card_padding_mm,
        card_border_radius = cfg.card_border_radius_mm,
        title_font_size = cfg.title_font_size_px,
        title_font_weight = cfg.title_font_weight,
        title_bottom_margin = cfg.title_bottom_margin_mm,
        title_letter_spacing = cfg.title_letter_spacing_px,
        content_gap = cfg.content_gap_mm,
        left_font_size = cfg.left_column_font_size_px,
        left_font_weight = cfg.left_column_font_weight,
        left_line_height = cfg.left_column_line_height,
        left_row_gap = cfg.left_column_row_gap_mm,
        right_panel_border_color = cfg.right_panel_border_color,
        right_panel_background = cfg.right_panel_background,
        divider_color = cfg.divider_color,
        media_padding = cfg.media_padding_mm,
        photo_placeholder_color = cfg.photo_placeholder_color,
        photo_placeholder_font_size = cfg.photo_placeholder_font_size_px,
    )
}

/// Render the printable ID card document for the given visitors
///
/// Visitors without a QR code are skipped; returns `None` when nothing
/// remains to print. Cards are laid out [`CARDS_PER_PAGE`] to a page, the
/// last page padded with blank cards. `pdl_name_for` resolves the visited
/// inmate's display name for each visitor.
pub fn render_card_document<F>(
    visitors: &[Visitor],
    options: &PrintCardOptions,
    pdl_name_for: F,
) -> Option<String>
where
    F: Fn(&Visitor) -> String,
{
    let printable: Vec<&Visitor> = visitors.iter().filter(|v| v.has_qr_code()).collect();
    if printable.is_empty() {
        return None;
    }

    let pages_html: String = printable
        .chunks(CARDS_PER_PAGE)
        .map(|page| {
            let cards: String = page
                .iter()
                .map(|visitor| render_card(visitor, options, &pdl_name_for(visitor)))
                .collect();
            let blanks: String = (page.len()..CARDS_PER_PAGE)
                .map(|_| r#"<div class="id-card id-card-empty"></div>"#)
                .collect();
            format!(r#"<div class="print-page">{}{}</div>"#, cards, blanks)
        })
        .collect();

    Some(format!(
        r#"<html>
  <head>
    <title>{title}</title>
    <style>
{css}
    </style>
  </head>
  <body>
    {pages}
  </body>
</html>"#,
        title = escape_html(&options.document_title),
        css = document_css(&options.layout),
        pages = pages_html,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn visitor(first: &str, last: &str, with_qr: bool) -> Visitor {
        Visitor {
            first_name: first.to_string(),
            last_name: last.to_string(),
            address: Some("123 Mabini St, Iloilo City".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12),
            relationship: Some("Sibling".to_string()),
            qr_code: with_qr.then(|| "data:image/png;base64,abc".to_string()),
            ..Default::default()
        }
    }

    fn options() -> PrintCardOptions {
        PrintCardOptions {
            api_base_url: "http://localhost:5001".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_printable_visitors() {
        let visitors = vec![visitor("Juan", "Dela Cruz", false)];
        assert!(render_card_document(&visitors, &options(), |_| "N/A".to_string()).is_none());
        assert!(render_card_document(&[], &options(), |_| "N/A".to_string()).is_none());
    }

    #[test]
    fn test_pagination_and_blank_padding() {
        let visitors: Vec<Visitor> = (0..5)
            .map(|i| visitor(&format!("Visitor{}", i), "Santos", true))
            .collect();

        let html = render_card_document(&visitors, &options(), |_| "Garcia, Pedro".to_string())
            .unwrap();

        assert_eq!(html.matches(r#"<div class="print-page">"#).count(), 2);
        assert_eq!(html.matches(r#"<div class="id-card">"#).count(), 5);
        // Second page holds one card and three blanks
        assert_eq!(html.matches("id-card-empty").count(), 3);
    }

    #[test]
    fn test_visitors_without_qr_are_skipped() {
        let visitors = vec![
            visitor("Juan", "Dela Cruz", true),
            visitor("Maria", "Reyes", false),
        ];

        let html =
            render_card_document(&visitors, &options(), |_| "N/A".to_string()).unwrap();
        assert!(html.contains("Juan Dela Cruz"));
        assert!(!html.contains("Maria Reyes"));
    }

    #[test]
    fn test_record_fields_are_escaped() {
        let mut sneaky = visitor("Juan", "Dela Cruz", true);
        sneaky.address = Some("<script>alert('x')</script>".to_string());

        let html = render_card_document(&[sneaky], &options(), |_| "O'Brien & Sons".to_string())
            .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("O&#39;Brien &amp; Sons"));
    }

    #[test]
    fn test_missing_fields_default_to_na() {
        let bare = Visitor {
            qr_code: Some("data:image/png;base64,abc".to_string()),
            ..Default::default()
        };

        let html = render_card_document(&[bare], &options(), |_| "N/A".to_string()).unwrap();
        assert!(html.contains("<strong>Name:</strong> N/A"));
        assert!(html.contains("<strong>Address:</strong> N/A"));
        assert!(html.contains("<strong>Birthday:</strong> N/A"));
        assert!(html.contains("photo-placeholder"));
    }

    #[test]
    fn test_relationship_row_toggle() {
        let visitors = vec![visitor("Juan", "Dela Cruz", true)];
        let mut opts = options();

        let html = render_card_document(&visitors, &opts, |_| "N/A".to_string()).unwrap();
        assert!(html.contains("<strong>Relationship:</strong> Sibling"));

        opts.show_relationship = false;
        let html = render_card_document(&visitors, &opts, |_| "N/A".to_string()).unwrap();
        assert!(!html.contains("Relationship"));
    }

    #[test]
    fn test_standard_visitor_layout_preset() {
        let layout = CardLayout::standard_visitor();
        assert_eq!(layout.card_padding_mm, 4.0);
        assert_eq!(layout.title_font_size_px, 14.0);
        // Untouched fields keep the defaults
        assert_eq!(layout.page_margin_mm, CardLayout::default().page_margin_mm);
        assert_eq!(layout.card_background, CardLayout::default().card_background);
    }
}
