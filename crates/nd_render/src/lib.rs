//! Static HTML rendering of a [`NewsCollection`].

pub mod figures;
pub mod page;

use nd_core::{DateInfo, NewsCollection};
use tracing::debug;

pub use figures::{Figure, VIP_FIGURES};
pub use page::{Page, PointTag, SECTION_LIMIT};

/// Renders the full document. Pure: the same inputs always give the same bytes.
pub fn render_page(news: &NewsCollection, date: &DateInfo) -> String {
    debug!("🖨️ Rendering page with {} items for {}", news.len(), date.formatted);
    Page::new(news, date).to_string()
}
