mod mock_generator;
mod openai_generator;

pub use mock_generator::MockResponseGenerator;
pub use openai_generator::OpenAiGenerator;
