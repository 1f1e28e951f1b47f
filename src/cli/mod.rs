mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Run CLI mode: parse arguments, apply them, generate output.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Try 'genpass --help'.");
            std::process::exit(2);
        }
    };

    let _ = ctx.run();
}
