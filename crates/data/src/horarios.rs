//! Derivação dos horários disponíveis de uma sala em uma data. O backend
//! devolve os rótulos ocupados; aqui calculamos o complemento contra a
//! janela candidata de slots de uma hora.

use std::collections::HashSet;

pub const ABERTURA_PADRAO: u32 = 8;
pub const FECHAMENTO_PADRAO: u32 = 18;

/// "09:00" para a hora 9.
pub fn rotulo(hora: u32) -> String {
    format!("{hora:02}:00")
}

/// Hora inteira de um rótulo como "09:00" ou "9:00". `None` para entradas
/// fora do formato.
pub fn hora_do_rotulo(rotulo: &str) -> Option<u32> {
    let (hora, minutos) = rotulo.trim().split_once(':')?;
    let hora: u32 = hora.parse().ok()?;
    let minutos: u32 = minutos.parse().ok()?;
    if hora > 23 || minutos > 59 {
        return None;
    }
    Some(hora)
}

/// Janela candidata de slots de uma hora em `[abertura, fechamento)`.
pub fn horarios_candidatos(abertura: u32, fechamento: u32) -> Vec<String> {
    if fechamento <= abertura {
        return Vec::new();
    }
    (abertura..fechamento).map(rotulo).collect()
}

/// Complemento da janela candidata contra os rótulos ocupados, em ordem
/// crescente. Rótulos ocupados fora da janela são ignorados.
pub fn horarios_livres(ocupados: &[String], abertura: u32, fechamento: u32) -> Vec<String> {
    let horas_ocupadas: HashSet<u32> = ocupados
        .iter()
        .filter_map(|rotulo| hora_do_rotulo(rotulo))
        .collect();

    (abertura..fechamento)
        .filter(|hora| !horas_ocupadas.contains(hora))
        .map(rotulo)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotulo_com_zero_a_esquerda() {
        assert_eq!(rotulo(8), "08:00");
        assert_eq!(rotulo(14), "14:00");
    }

    #[test]
    fn test_hora_do_rotulo() {
        assert_eq!(hora_do_rotulo("09:00"), Some(9));
        assert_eq!(hora_do_rotulo("9:00"), Some(9));
        assert_eq!(hora_do_rotulo(" 17:00 "), Some(17));
        assert_eq!(hora_do_rotulo("25:00"), None);
        assert_eq!(hora_do_rotulo("abc"), None);
    }

    #[test]
    fn test_janela_vazia_quando_fechamento_nao_e_maior() {
        assert!(horarios_candidatos(18, 18).is_empty());
        assert!(horarios_candidatos(18, 8).is_empty());
    }
}
