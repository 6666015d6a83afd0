use chrono::NaiveDate;
use data::dashboard::*;
use data::{Reserva, Sala};

fn sala(id: i32, nome: &str, ativa: bool) -> Sala {
    Sala {
        id,
        nome: nome.into(),
        local: "Térreo".into(),
        capacidade: None,
        descricao: None,
        criador_id: None,
        ativa,
        created_at: None,
        updated_at: None,
    }
}

fn reserva(id: i32, sala_id: i32, inicio: &str, fim: &str) -> Reserva {
    Reserva {
        id,
        sala: None,
        local: None,
        sala_id: Some(sala_id),
        sala_rel: None,
        data_hora_inicio: data::datetime::parse_flexivel(inicio).unwrap(),
        data_hora_fim: data::datetime::parse_flexivel(fim).unwrap(),
        responsavel_id: 1,
        responsavel: None,
        cafe_quantidade: None,
        cafe_descricao: None,
        link_meet: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn test_salas_stats_conta_ativas_e_inativas() {
    let salas = vec![
        sala(1, "Aquário", true),
        sala(2, "Auditório", true),
        sala(3, "Depósito", false),
    ];

    let stats = salas_stats(&salas);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.ativas, 2);
    assert_eq!(stats.inativas, 1);
}

#[test]
fn test_reservas_stats_janela_de_hoje_e_da_semana() {
    let hoje = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
    let reservas = vec![
        reserva(1, 1, "2025-03-12T09:00:00", "2025-03-12T10:00:00"),
        reserva(2, 1, "2025-03-10T09:00:00", "2025-03-10T10:00:00"),
        reserva(3, 1, "2025-03-15T09:00:00", "2025-03-15T10:00:00"),
        reserva(4, 1, "2025-03-20T09:00:00", "2025-03-20T10:00:00"),
    ];

    let stats = reservas_stats(&reservas, hoje);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.hoje, 1);
    // Janela móvel 12/03..19/03: cobre as reservas 1 e 3; a de 10/03 já
    // passou e a de 20/03 cai fora.
    assert_eq!(stats.na_semana, 2);
}

#[test]
fn test_top_salas_ordena_por_uso_e_desempata_pelo_nome() {
    let salas = vec![
        sala(1, "Aquário", true),
        sala(2, "Auditório", true),
        sala(3, "Biblioteca", true),
    ];
    let reservas = vec![
        reserva(1, 2, "2025-03-10T09:00:00", "2025-03-10T10:00:00"),
        reserva(2, 2, "2025-03-10T11:00:00", "2025-03-10T12:00:00"),
        reserva(3, 1, "2025-03-10T09:00:00", "2025-03-10T10:00:00"),
        reserva(4, 3, "2025-03-10T09:00:00", "2025-03-10T10:00:00"),
    ];

    let top = top_salas(&reservas, &salas, 2);
    assert_eq!(
        top,
        vec![("Auditório".to_string(), 2), ("Aquário".to_string(), 1)]
    );
}

#[test]
fn test_dias_com_horario_livre_pula_dia_lotado() {
    let salas = vec![sala(1, "Aquário", true)];
    // Com uma sala ativa e janela 9..11 há 2 horários por dia. A varredura
    // começa amanhã (13/03), que está lotado; 14/03 e 15/03 têm vaga.
    let reservas = vec![
        reserva(1, 1, "2025-03-13T09:00:00", "2025-03-13T10:00:00"),
        reserva(2, 1, "2025-03-13T10:00:00", "2025-03-13T11:00:00"),
        reserva(3, 1, "2025-03-12T09:00:00", "2025-03-12T10:00:00"),
    ];
    let hoje = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();

    let dias = dias_com_horario_livre(&reservas, &salas, hoje, 7, 2, 9, 11);
    assert_eq!(
        dias,
        vec![
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
        ]
    );
}

#[test]
fn test_dias_com_horario_livre_sem_sala_ativa() {
    let salas = vec![sala(1, "Depósito", false)];
    let hoje = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();

    let dias = dias_com_horario_livre(&[], &salas, hoje, 7, 3, 8, 18);
    assert!(dias.is_empty());
}
