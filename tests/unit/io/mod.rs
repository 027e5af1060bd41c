mod configuration;
mod metadata;
