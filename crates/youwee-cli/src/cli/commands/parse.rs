//! `youwee parse <link>` – validate one deep link.

use anyhow::Result;
use serde_json::json;
use youwee_core::deep_link::DeepLinkParser;

pub fn run_parse(parser: &DeepLinkParser, link: &str) -> Result<i32> {
    match parser.parse(link) {
        Some(request) => {
            let route = parser.route(&request);
            let out = json!({ "request": request, "route": route });
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(0)
        }
        None => {
            println!("ignored");
            Ok(1)
        }
    }
}
