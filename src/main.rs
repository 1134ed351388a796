// GlobWeb Build - assemble, minify and package the library
// Entry point; the pipeline lives in the library crate

use globweb_build::cli::CliHandler;

#[tokio::main]
async fn main() {
    let handler = CliHandler::new();

    if let Err(e) = handler.run().await {
        eprintln!("{}", e.format_detailed());
        std::process::exit(1);
    }
}
