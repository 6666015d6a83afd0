use chrono::NaiveDate;
use data::participante::candidatos_a_convite;
use data::reserva::*;
use data::sala::*;
use data::usuario::*;
use data::{Participante, Reserva, Sala, Usuario};

fn sala(id: i32, nome: &str, local: &str, ativa: bool) -> Sala {
    Sala {
        id,
        nome: nome.into(),
        local: local.into(),
        capacidade: None,
        descricao: None,
        criador_id: None,
        ativa,
        created_at: None,
        updated_at: None,
    }
}

fn usuario(id: i32, nome: Option<&str>, username: &str, email: &str, admin: bool) -> Usuario {
    Usuario {
        id,
        nome: nome.map(Into::into),
        username: username.into(),
        email: email.into(),
        admin,
        created_at: None,
    }
}

fn reserva(id: i32, sala_id: Option<i32>, inicio: &str, fim: &str) -> Reserva {
    Reserva {
        id,
        sala: None,
        local: None,
        sala_id,
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
fn test_filtro_usuarios_por_substring_e_admin() {
    let usuarios = vec![
        usuario(1, Some("Maria Silva"), "maria", "maria@acme.com.br", true),
        usuario(2, Some("João Souza"), "joao", "joao@acme.com.br", false),
        usuario(3, None, "mariana", "mariana@outra.com", false),
    ];

    let filtro = UsuarioFiltro {
        nome: "mari".into(),
        ..Default::default()
    };
    let nomes: Vec<i32> = filtra_usuarios(&usuarios, &filtro)
        .iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(nomes, vec![1]);

    let filtro = UsuarioFiltro {
        username: "maria".into(),
        admin: FiltroAdmin::Nao,
        ..Default::default()
    };
    let ids: Vec<i32> = filtra_usuarios(&usuarios, &filtro)
        .iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, vec![3]);

    let filtro = UsuarioFiltro {
        email: "ACME".into(),
        ..Default::default()
    };
    assert_eq!(filtra_usuarios(&usuarios, &filtro).len(), 2);
}

#[test]
fn test_filtro_admin_do_valor() {
    assert_eq!(FiltroAdmin::do_valor("sim"), FiltroAdmin::Sim);
    assert_eq!(FiltroAdmin::do_valor("nao"), FiltroAdmin::Nao);
    assert_eq!(FiltroAdmin::do_valor("qualquer"), FiltroAdmin::Todos);
}

#[test]
fn test_filtro_salas_texto_cobre_nome_e_local() {
    let salas = vec![
        sala(1, "Sala Aquário", "2º andar", true),
        sala(2, "Auditório", "Térreo", true),
        sala(3, "Sala Reunião", "2º andar", false),
    ];

    let filtro = SalaFiltro {
        texto: "andar".into(),
        ativa: FiltroAtiva::Todas,
    };
    assert_eq!(filtra_salas(&salas, &filtro).len(), 2);

    let filtro = SalaFiltro {
        texto: "andar".into(),
        ativa: FiltroAtiva::Ativas,
    };
    let nomes: Vec<String> = filtra_salas(&salas, &filtro)
        .iter()
        .map(|s| s.nome.clone())
        .collect();
    assert_eq!(nomes, vec!["Sala Aquário"]);

    let filtro = SalaFiltro {
        texto: String::new(),
        ativa: FiltroAtiva::Inativas,
    };
    let nomes: Vec<String> = filtra_salas(&salas, &filtro)
        .iter()
        .map(|s| s.nome.clone())
        .collect();
    assert_eq!(nomes, vec!["Sala Reunião"]);
}

#[test]
fn test_filtro_reservas_por_sala_e_data() {
    let reservas = vec![
        reserva(1, Some(1), "2025-03-10T14:00:00", "2025-03-10T15:00:00"),
        reserva(2, Some(2), "2025-03-10T09:00:00", "2025-03-10T10:00:00"),
        reserva(3, Some(1), "2025-03-11T14:00:00", "2025-03-11T15:00:00"),
    ];

    let filtro = ReservaFiltro {
        sala_id: Some(1),
        data: None,
    };
    let ids: Vec<i32> = filtra_reservas(&reservas, &filtro)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let filtro = ReservaFiltro {
        sala_id: Some(1),
        data: NaiveDate::from_ymd_opt(2025, 3, 11),
    };
    let ids: Vec<i32> = filtra_reservas(&reservas, &filtro)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn test_filtra_reservas_ordena_por_inicio() {
    let reservas = vec![
        reserva(1, None, "2025-03-12T14:00:00", "2025-03-12T15:00:00"),
        reserva(2, None, "2025-03-10T09:00:00", "2025-03-10T10:00:00"),
        reserva(3, None, "2025-03-11T08:00:00", "2025-03-11T09:00:00"),
    ];

    let ids: Vec<i32> = filtra_reservas(&reservas, &ReservaFiltro::default())
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn test_nome_da_sala_cadeia_de_retrocesso() {
    let salas = vec![sala(7, "Sala Aquário", "2º andar", true)];

    let mut r = reserva(1, Some(7), "2025-03-10T14:00:00", "2025-03-10T15:00:00");
    assert_eq!(nome_da_sala(&r, &salas), "Sala Aquário");

    r.sala_rel = Some(sala(9, "Auditório", "Térreo", true));
    assert_eq!(nome_da_sala(&r, &salas), "Auditório");

    let mut legada = reserva(2, None, "2025-03-10T14:00:00", "2025-03-10T15:00:00");
    legada.sala = Some("Sala antiga".into());
    assert_eq!(nome_da_sala(&legada, &salas), "Sala antiga");

    let vazia = reserva(3, Some(99), "2025-03-10T14:00:00", "2025-03-10T15:00:00");
    assert_eq!(nome_da_sala(&vazia, &salas), "N/A");
}

#[test]
fn test_historico_filtra_por_papel() {
    let itens = vec![
        HistoricoItem {
            sou_responsavel: true,
            reserva: reserva(1, Some(1), "2025-03-10T14:00:00", "2025-03-10T15:00:00"),
        },
        HistoricoItem {
            sou_responsavel: false,
            reserva: reserva(2, Some(1), "2025-03-11T14:00:00", "2025-03-11T15:00:00"),
        },
    ];

    let filtro = HistoricoFiltro {
        papel: FiltroPapel::Participante,
        ..Default::default()
    };
    let ids: Vec<i32> = filtra_historico(&itens, &filtro)
        .iter()
        .map(|i| i.reserva.id)
        .collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn test_historico_ordena_do_mais_recente() {
    let itens = vec![
        HistoricoItem {
            sou_responsavel: true,
            reserva: reserva(1, None, "2025-03-10T14:00:00", "2025-03-10T15:00:00"),
        },
        HistoricoItem {
            sou_responsavel: true,
            reserva: reserva(2, None, "2025-03-12T14:00:00", "2025-03-12T15:00:00"),
        },
    ];

    let ids: Vec<i32> = filtra_historico(&itens, &HistoricoFiltro::default())
        .iter()
        .map(|i| i.reserva.id)
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_tipo_historico_vira_flags_da_consulta() {
    assert_eq!(TipoHistorico::Todas.flags(), (false, false));
    assert_eq!(TipoHistorico::Futuras.flags(), (true, false));
    assert_eq!(TipoHistorico::Passadas.flags(), (false, true));
}

#[test]
fn test_candidatos_a_convite_exclui_responsavel_e_ja_convidados() {
    let usuarios = vec![
        usuario(1, None, "resp", "resp@acme.com.br", false),
        usuario(2, None, "ana", "ana@acme.com.br", false),
        usuario(3, None, "beto", "beto@acme.com.br", false),
    ];
    let participantes = vec![Participante {
        id: 50,
        reserva_id: 9,
        usuario_id: 2,
        notificado: false,
        usuario: None,
        created_at: None,
    }];

    let candidatos = candidatos_a_convite(&usuarios, &participantes, 1);
    let ids: Vec<i32> = candidatos.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn test_reserva_futura_e_passada() {
    let agora = data::datetime::parse_flexivel("2025-03-10T12:00:00").unwrap();

    let futura = reserva(1, None, "2025-03-10T14:00:00", "2025-03-10T15:00:00");
    assert!(futura.eh_futura(agora));
    assert!(!futura.eh_passada(agora));

    let passada = reserva(2, None, "2025-03-10T09:00:00", "2025-03-10T10:00:00");
    assert!(!passada.eh_futura(agora));
    assert!(passada.eh_passada(agora));

    let em_andamento = reserva(3, None, "2025-03-10T11:00:00", "2025-03-10T13:00:00");
    assert!(!em_andamento.eh_futura(agora));
    assert!(!em_andamento.eh_passada(agora));
}
