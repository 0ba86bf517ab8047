use anyhow::Context;
use inquiry_config::Config;
use inquiry_core_form_impl::FormServiceImpl;
use inquiry_core_validation_impl::ValidationServiceImpl;
use inquiry_extern_impl::{
    http::HttpClient,
    inquiry::{InquiryApiServiceConfig, InquiryApiServiceImpl},
};
use inquiry_shared_impl::id::IdServiceImpl;

pub type Form = FormServiceImpl<ValidationServiceImpl, InquiryApiServiceImpl, IdServiceImpl>;

/// Wires up a fresh contact form from the loaded configuration.
pub fn build_form(config: &Config) -> anyhow::Result<Form> {
    let http = HttpClient::new(config.api.timeout.into()).context("Failed to build http client")?;
    let inquiry_api = InquiryApiServiceImpl::new(
        InquiryApiServiceConfig::new(Some(config.api.endpoint.clone())),
        http,
    );

    Ok(FormServiceImpl::new(
        ValidationServiceImpl,
        inquiry_api,
        IdServiceImpl,
    ))
}
