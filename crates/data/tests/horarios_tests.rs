use data::horarios::*;

#[test]
fn test_janela_completa_sem_ocupados() {
    let livres = horarios_livres(&[], ABERTURA_PADRAO, FECHAMENTO_PADRAO);
    assert_eq!(livres, horarios_candidatos(ABERTURA_PADRAO, FECHAMENTO_PADRAO));
    assert_eq!(livres.len(), 10);
    assert_eq!(livres.first().map(String::as_str), Some("08:00"));
    assert_eq!(livres.last().map(String::as_str), Some("17:00"));
}

#[test]
fn test_complemento_dos_ocupados() {
    let ocupados = vec!["09:00".to_string(), "14:00".to_string()];
    let livres = horarios_livres(&ocupados, 8, 18);
    assert_eq!(
        livres,
        vec!["08:00", "10:00", "11:00", "12:00", "13:00", "15:00", "16:00", "17:00"]
    );
}

#[test]
fn test_ordem_crescente_preservada() {
    let ocupados = vec!["16:00".to_string(), "08:00".to_string(), "12:00".to_string()];
    let livres = horarios_livres(&ocupados, 8, 18);
    let mut ordenados = livres.clone();
    ordenados.sort();
    assert_eq!(livres, ordenados);
    assert_eq!(livres.len(), 7);
}

#[test]
fn test_todos_ocupados_resulta_vazio() {
    let ocupados: Vec<String> = horarios_candidatos(8, 18);
    assert!(horarios_livres(&ocupados, 8, 18).is_empty());
}

#[test]
fn test_rotulos_fora_da_janela_sao_ignorados() {
    let ocupados = vec!["06:00".to_string(), "22:00".to_string(), "meio-dia".to_string()];
    let livres = horarios_livres(&ocupados, 8, 18);
    assert_eq!(livres.len(), 10);
}

#[test]
fn test_rotulo_sem_zero_a_esquerda_conta_como_ocupado() {
    let ocupados = vec!["9:00".to_string()];
    let livres = horarios_livres(&ocupados, 8, 18);
    assert!(!livres.contains(&"09:00".to_string()));
    assert_eq!(livres.len(), 9);
}

#[test]
fn test_janela_customizada() {
    let livres = horarios_livres(&["10:00".to_string()], 9, 12);
    assert_eq!(livres, vec!["09:00", "11:00"]);
}
