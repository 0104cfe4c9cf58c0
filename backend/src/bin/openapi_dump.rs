//! Print the OpenAPI document as JSON.

use courses::ApiDoc;
use utoipa::OpenApi;

fn main() {
    println!(
        "{}",
        ApiDoc::openapi()
            .to_pretty_json()
            .expect("OpenAPI document serialises")
    );
}
