use app::App;
use common::settings::{Settings, SettingsOverride};
use leptos::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::fmt;
use tracing_subscriber_wasm::MakeConsoleWriter;
use wasm_bindgen::JsValue;

/// Configuração efetiva: padrões de build sobrescritos pelo objeto
/// `window.APP_CONFIG`, quando o index.html o define.
fn settings_do_ambiente() -> Settings {
    let base = Settings::from_env();
    let Some(objeto) = window().get("APP_CONFIG") else {
        return base;
    };
    match serde_wasm_bindgen::from_value::<SettingsOverride>(JsValue::from(objeto)) {
        Ok(sobrescrita) => base.merged(sobrescrita),
        Err(erro) => {
            warn!("APP_CONFIG inválido, usando padrões: {erro}");
            base
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    fmt::Subscriber::builder()
        .with_env_filter("app=debug,api=debug,data=debug")
        .with_writer(MakeConsoleWriter::default())
        .without_time()
        .with_ansi(false)
        .init();

    let settings = settings_do_ambiente();
    info!("iniciando Reserva de Salas contra {}", settings.graphql_url);

    mount_to_body(move || view! { <App settings=settings/> });
}
