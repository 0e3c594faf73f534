mod chapters;
mod integration;
