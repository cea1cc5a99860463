mod ask;
mod help;
mod prompt_response;

pub use ask::Ask;
pub use help::Help;
pub use prompt_response::PromptResponse;
