//! SignAI - Sign-language video translation pipeline
//! 
//! Uploads a picked video to a media host, forwards the hosted URL to an AI
//! inference endpoint and returns the translated text, a title and a
//! thumbnail URL for display.

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod media;
pub mod source;
pub mod status;
pub mod translate;
pub mod workflow;
