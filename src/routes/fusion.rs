//! `/api/fusion/*` routes — fusion lookups rendered as HTML fragments.
//!
//! Query params:
//!   result   — `a`, `b`: the two ingredient arcanas
//!   pairs    — `target`, optional `format=json`
//!   partners — `arcana`
//!   chart    — none

use crate::arcana::Arcana;
use crate::fusion::{self, FusionPair};
use crate::routes::util::{arcana_error, arcana_param, escape_html, get_param, parse_query};

/// Handle GET /api/fusion/result?a={arcana}&b={arcana}
pub fn handle_result(query: &str) -> String {
    let params = parse_query(query);
    let a = match arcana_param(&params, "a") {
        Ok(a) => a,
        Err(e) => return arcana_error("a", &e),
    };
    let b = match arcana_param(&params, "b") {
        Ok(b) => b,
        Err(e) => return arcana_error("b", &e),
    };

    if a == b {
        return format!(
            r#"<span><strong>Result:</strong> <em>{} cannot be fused with itself</em></span>"#,
            a
        );
    }

    match fusion::resolve(a, b) {
        Some(result) => format!(
            r#"<span><strong>Result:</strong> {} × {} = <span class="font-semibold">{}</span></span>"#,
            a, b, result
        ),
        None => format!(
            r#"<span><strong>Result:</strong> <em>no fusion for {} × {}</em></span>"#,
            a, b
        ),
    }
}

/// Handle GET /api/fusion/pairs?target={arcana}[&format=json]
pub fn handle_pairs(query: &str) -> String {
    let params = parse_query(query);
    let as_json = get_param(&params, "format") == Some("json");
    let target = match arcana_param(&params, "target") {
        Ok(t) => t,
        Err(e) if as_json => return json_error(&e.to_string()),
        Err(e) => return arcana_error("target", &e),
    };

    let pairs = fusion::find_pairs_producing(target);
    if as_json {
        return serde_json::to_string(&pairs).unwrap_or_else(|_| "[]".to_string());
    }
    render_pairs(target, &pairs)
}

fn json_error(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

fn render_pairs(target: Arcana, pairs: &[FusionPair]) -> String {
    if pairs.is_empty() {
        return format!(
            r#"<span><em>No fusion produces the {} arcana.</em></span>"#,
            target
        );
    }

    let mut html = String::with_capacity(64 + pairs.len() * 48);
    html.push_str(&format!(
        r#"<ul class="fusion-pairs" data-target="{}">"#,
        escape_html(target.name())
    ));
    for pair in pairs {
        html.push_str(&format!(
            "<li>{} × {}</li>",
            pair.first(),
            pair.second()
        ));
    }
    html.push_str("</ul>");
    html
}

/// Handle GET /api/fusion/partners?arcana={arcana}
pub fn handle_partners(query: &str) -> String {
    let params = parse_query(query);
    let arcana = match arcana_param(&params, "arcana") {
        Ok(a) => a,
        Err(e) => return arcana_error("arcana", &e),
    };

    let partners = fusion::table().partners(arcana);
    if partners.is_empty() {
        return format!(
            r#"<span><em>The {} arcana has no fusion partners.</em></span>"#,
            arcana
        );
    }

    let mut html = String::from(
        r#"<table class="fusion-partners"><thead><tr><th>Partner</th><th>Result</th></tr></thead><tbody>"#,
    );
    for (partner, result) in partners {
        html.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>", partner, result));
    }
    html.push_str("</tbody></table>");
    html
}

/// Handle GET /api/fusion/chart
///
/// Rows and columns follow the declared arcana order.
pub fn handle_chart() -> String {
    let chart = fusion::table().chart();

    let mut html = String::with_capacity(16 * 1024);
    html.push_str(r#"<table class="fusion-chart"><thead><tr><th></th>"#);
    for arcana in Arcana::ALL {
        html.push_str(&format!("<th>{}</th>", arcana));
    }
    html.push_str("</tr></thead><tbody>");

    for row in Arcana::ALL {
        html.push_str(&format!("<tr><th>{}</th>", row));
        for col in Arcana::ALL {
            match chart[row.rank()][col.rank()] {
                Some(result) => html.push_str(&format!("<td>{}</td>", result)),
                None if row == col => html.push_str(r#"<td class="self">—</td>"#),
                None => html.push_str("<td></td>"),
            }
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}
