use crate::{
    config, error,
    form::{self, FormSettings},
};

/// Opens the export form, pre-filled from the configuration.
pub async fn form() {
    let settings = FormSettings {
        api_url: config::deezer_api_url(),
        token: config::deezer_arl(),
        default_dir: config::default_output_dir(),
    };

    if let Err(e) = form::run(settings).await {
        error!("Form terminated unexpectedly: {}", e);
    }
}
