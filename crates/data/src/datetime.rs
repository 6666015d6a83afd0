//! Datas e horas do jeito que o backend envia: ISO-8601, às vezes com
//! frações de segundo, às vezes com `Z` ou offset. O parse aceita todas as
//! variantes; a serialização grava sempre `%Y-%m-%dT%H:%M:%S`.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};

pub const FORMATO_WIRE: &str = "%Y-%m-%dT%H:%M:%S";

pub fn parse_flexivel(texto: &str) -> Option<NaiveDateTime> {
    let texto = texto.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(texto, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(texto, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(texto) {
        return Some(dt.naive_utc());
    }
    None
}

/// Serde para campos `NaiveDateTime` obrigatórios.
pub mod iso {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.format(FORMATO_WIRE).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let texto = String::deserialize(deserializer)?;
        parse_flexivel(&texto)
            .ok_or_else(|| D::Error::custom(format!("data/hora inválida: {texto}")))
    }
}

/// Serde para campos `Option<NaiveDateTime>`.
pub mod iso_opt {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        dt: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => serializer.serialize_str(&dt.format(FORMATO_WIRE).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let texto: Option<String> = Option::deserialize(deserializer)?;
        match texto {
            None => Ok(None),
            Some(texto) if texto.trim().is_empty() => Ok(None),
            Some(texto) => parse_flexivel(&texto)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("data/hora inválida: {texto}"))),
        }
    }
}

pub fn formata_data(data: NaiveDate) -> String {
    data.format("%d/%m/%Y").to_string()
}

pub fn formata_data_hora(dt: NaiveDateTime) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

pub fn formata_hora(dt: NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}

/// Período de uma reserva. Mesmo dia vira "10/03/2025 14:00 às 15:00";
/// dias distintos mostram as duas datas completas.
pub fn formata_periodo(inicio: NaiveDateTime, fim: NaiveDateTime) -> String {
    if inicio.date() == fim.date() {
        format!("{} às {}", formata_data_hora(inicio), formata_hora(fim))
    } else {
        format!("{} às {}", formata_data_hora(inicio), formata_data_hora(fim))
    }
}

/// Valor aceito por `<input type="date">`.
pub fn data_iso(data: NaiveDate) -> String {
    data.format("%Y-%m-%d").to_string()
}

pub fn parse_data_iso(texto: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(texto.trim(), "%Y-%m-%d").ok()
}

pub fn nome_dia_semana(data: NaiveDate) -> &'static str {
    match data.weekday() {
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(texto: &str) -> NaiveDateTime {
        parse_flexivel(texto).unwrap()
    }

    #[test]
    fn test_parse_flexivel_variantes() {
        let esperado = dt("2025-03-10T14:00:00");
        assert_eq!(parse_flexivel("2025-03-10T14:00:00.000"), Some(esperado));
        assert_eq!(parse_flexivel("2025-03-10T14:00:00Z"), Some(esperado));
        assert_eq!(parse_flexivel("2025-03-10T14:00:00+00:00"), Some(esperado));
        assert_eq!(parse_flexivel("2025-03-10 14:00:00"), Some(esperado));
        assert_eq!(parse_flexivel("10/03/2025"), None);
    }

    #[test]
    fn test_formata_periodo_mesmo_dia() {
        let inicio = dt("2025-03-10T14:00:00");
        let fim = dt("2025-03-10T15:00:00");
        assert_eq!(formata_periodo(inicio, fim), "10/03/2025 14:00 às 15:00");
    }

    #[test]
    fn test_formata_periodo_dias_distintos() {
        let inicio = dt("2025-03-10T14:00:00");
        let fim = dt("2025-03-11T10:00:00");
        assert_eq!(
            formata_periodo(inicio, fim),
            "10/03/2025 14:00 às 11/03/2025 10:00"
        );
    }

    #[test]
    fn test_nome_dia_semana() {
        let segunda = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(nome_dia_semana(segunda), "Segunda-feira");
        let domingo = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(nome_dia_semana(domingo), "Domingo");
    }
}
