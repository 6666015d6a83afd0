use serde::Deserialize;

/// Configuração do front-end. Resolvida em camadas: valores padrão, depois
/// variáveis de ambiente em tempo de compilação, por fim o objeto global
/// `window.APP_CONFIG` injetado pela implantação (aplicado no bootstrap).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Endpoint GraphQL do backend.
    pub graphql_url: String,
    /// Primeira hora reservável do dia.
    pub abertura: u32,
    /// Primeira hora não reservável (janela [abertura, fechamento)).
    pub fechamento: u32,
    /// Intervalo do polling de notificações, em segundos.
    pub poll_segundos: u64,
    /// Limite enviado nas consultas de listagem; a paginação é local.
    pub limite_busca: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            graphql_url: "http://localhost:8000/graphql".into(),
            abertura: 8,
            fechamento: 18,
            poll_segundos: 30,
            limite_busca: 1000,
        }
    }
}

/// Sobrescrita parcial vinda do `window.APP_CONFIG`; campos ausentes mantêm
/// o valor da camada anterior.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsOverride {
    pub graphql_url: Option<String>,
    pub abertura: Option<u32>,
    pub fechamento: Option<u32>,
    pub poll_segundos: Option<u64>,
    pub limite_busca: Option<i32>,
}

impl Settings {
    /// Camadas padrão + ambiente de compilação.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Some(url) = option_env!("RESERVAS_GRAPHQL_URL") {
            settings.graphql_url = url.to_string();
        }
        settings
    }

    pub fn merged(mut self, other: SettingsOverride) -> Self {
        if let Some(url) = other.graphql_url {
            self.graphql_url = url;
        }
        if let Some(abertura) = other.abertura {
            self.abertura = abertura;
        }
        if let Some(fechamento) = other.fechamento {
            self.fechamento = fechamento;
        }
        if let Some(segundos) = other.poll_segundos {
            self.poll_segundos = segundos;
        }
        if let Some(limite) = other.limite_busca {
            self.limite_busca = limite;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_aponta_para_localhost() {
        let settings = Settings::default();
        assert_eq!(settings.graphql_url, "http://localhost:8000/graphql");
        assert_eq!(settings.abertura, 8);
        assert_eq!(settings.fechamento, 18);
        assert_eq!(settings.poll_segundos, 30);
    }

    #[test]
    fn test_merged_aplica_somente_presentes() {
        let base = Settings::default();
        let sobrescrita: SettingsOverride =
            serde_json::from_str(r#"{"graphqlUrl":"https://api.acme.com.br/graphql"}"#).unwrap();

        let resultado = base.merged(sobrescrita);
        assert_eq!(resultado.graphql_url, "https://api.acme.com.br/graphql");
        assert_eq!(resultado.abertura, 8);
        assert_eq!(resultado.limite_busca, 1000);
    }

    #[test]
    fn test_merged_sobrescreve_janela() {
        let sobrescrita: SettingsOverride =
            serde_json::from_str(r#"{"abertura":7,"fechamento":19,"pollSegundos":60}"#).unwrap();

        let resultado = Settings::default().merged(sobrescrita);
        assert_eq!(resultado.abertura, 7);
        assert_eq!(resultado.fechamento, 19);
        assert_eq!(resultado.poll_segundos, 60);
    }
}
