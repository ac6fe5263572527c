pub mod provider_settings;
