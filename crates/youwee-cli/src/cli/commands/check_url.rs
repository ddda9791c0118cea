//! `youwee check-url <url>` – public HTTP(S) gate.

use youwee_core::host_safety::is_public_http_url;
use youwee_core::url_model::is_safe_url;

pub fn run_check_url(url: &str) -> i32 {
    let url = url.trim();
    if is_safe_url(url) && is_public_http_url(url) {
        println!("public");
        0
    } else {
        println!("blocked");
        1
    }
}
