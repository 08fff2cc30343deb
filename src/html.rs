// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! HTML table markup for showing a colour bar in a page.

use crate::encoder::ColorCodes;
use crate::png::unique_name;

/// Container size and id for [`colorbar_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// CSS width of the wrapper, e.g. `"500px"` or `"100%"`.
    pub width: String,
    /// CSS height of the wrapper.
    pub height: String,
    /// Element id suffix. Empty means "generate one".
    pub id: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            width: "500px".into(),
            height: "500px".into(),
            id: String::new(),
        }
    }
}

/// Id used when none is given.
const GENERATED_ID_LEN: usize = 13;

/// Render `codes` as a one-row table, one cell per colour.
pub fn colorbar_html(codes: &ColorCodes, opts: &HtmlOptions) -> String {
    let id = if opts.id.is_empty() {
        let mut id = unique_name();
        id.truncate(GENERATED_ID_LEN);
        id
    } else {
        escape_attr(&opts.id)
    };
    let width = escape_attr(&opts.width);
    let height = escape_attr(&opts.height);

    let mut html = format!(
        "<div class='colorbar-table-wrapper' id='colorbar-table-wrapper-{id}' style='width:{width}; height:{height}'>"
    );
    html.push_str(&format!(
        "<table id='colorbar-table-{id}' class='colorbar-table' style='width: 100%; height: 100%; border-collapse: collapse;'><tr>"
    ));
    for code in codes.iter() {
        html.push_str("<td style='padding: 0;'>");
        html.push_str(&format!("<div class='colorbar' style='height: 100%; background: #{code};'></div>"));
        html.push_str("</td>");
    }
    html.push_str("</tr></table></div>");
    html
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
