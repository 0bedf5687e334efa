use healthcheck_lambda::handle_request;
use lamedh_http::{
    handler,
    lambda::{self, Error},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    simple_logger::init_with_level(log::Level::Info)?;
    lambda::run(handler(handle_request)).await
}
