//! Connectivity demo: ping a local server before and after authenticating.
//!
//! Point it at a running server, e.g. a local Navidrome instance:
//!
//! ```sh
//! cargo run --example ping -- http://127.0.0.1:4533 karl donitz
//! ```

use opensubsonic_api::SubsonicClient;

fn main() {
    let mut args = std::env::args().skip(1);
    let url = args.next().unwrap_or_else(|| "http://127.0.0.1:4533".into());
    let user = args.next().unwrap_or_else(|| "karl".into());
    let pass = args.next().unwrap_or_else(|| "donitz".into());

    let mut client =
        SubsonicClient::new(&url, &user, &pass, "opensubsonic-api-example").unwrap();

    println!("ping without auth:\n{:#?}\n", client.ping());
    println!("authenticate:\n{:#?}", client.authenticate());
}
