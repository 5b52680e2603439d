//! HTML fragments for the results list, the detail overlay and the page shell.
//!
//! Every value that comes from the API or the user is escaped before it is
//! interpolated.

mod detail;
mod list;
mod page;

pub use detail::{render_detail, DetailView};
pub use list::{render_card, render_results, results_count, results_header, ResultsView};
pub use page::{render_page, PageView};

use html_escape::{encode_double_quoted_attribute, encode_text};

fn text(value: &str) -> String {
    encode_text(value).into_owned()
}

fn attr(value: &str) -> String {
    encode_double_quoted_attribute(value).into_owned()
}
