use parklog_core::pagination::{PageTarget, parse_page_param, resolve_page};

use crate::context::AppContext;

/// Turn a raw `--page` value into a page that exists.
///
/// Out-of-range requests are clamped and the clamp is flashed.
pub fn resolve_listing_page(
    ctx: &mut AppContext,
    raw: Option<&str>,
    total: i64,
    page_size: u32,
) -> u32 {
    let requested = raw.map_or(1, parse_page_param);
    let total = u64::try_from(total).unwrap_or(0);

    match resolve_page(requested, total, page_size) {
        PageTarget::Show(page) => page,
        PageTarget::Redirect(page) => {
            tracing::debug!(requested, page, "clamped page request");
            ctx.request.flash_message(format!("Showing page {page}."));
            page
        }
    }
}
