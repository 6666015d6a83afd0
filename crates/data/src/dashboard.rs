//! Agregações do painel inicial, todas calculadas sobre os lotes já
//! buscados de salas e reservas.

use chrono::{Duration, NaiveDate};

use crate::reserva::{Reserva, nome_da_sala};
use crate::sala::Sala;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalasStats {
    pub total: usize,
    pub ativas: usize,
    pub inativas: usize,
}

pub fn salas_stats(salas: &[Sala]) -> SalasStats {
    let ativas = salas.iter().filter(|sala| sala.ativa).count();
    SalasStats {
        total: salas.len(),
        ativas,
        inativas: salas.len() - ativas,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReservasStats {
    pub total: usize,
    pub hoje: usize,
    pub na_semana: usize,
}

/// "Esta semana" é a janela móvel de sete dias contada de hoje, não a
/// semana do calendário.
pub fn reservas_stats(reservas: &[Reserva], hoje: NaiveDate) -> ReservasStats {
    let fim = hoje + Duration::days(7);

    let mut stats = ReservasStats {
        total: reservas.len(),
        ..Default::default()
    };
    for reserva in reservas {
        let dia = reserva.data_hora_inicio.date();
        if dia == hoje {
            stats.hoje += 1;
        }
        if dia >= hoje && dia < fim {
            stats.na_semana += 1;
        }
    }
    stats
}

/// Salas mais reservadas, por nome resolvido; em empate vence a ordem
/// alfabética.
pub fn top_salas(reservas: &[Reserva], salas: &[Sala], max: usize) -> Vec<(String, usize)> {
    let mut contagem: Vec<(String, usize)> = Vec::new();
    for reserva in reservas {
        let nome = nome_da_sala(reserva, salas);
        match contagem.iter_mut().find(|(rotulo, _)| *rotulo == nome) {
            Some((_, total)) => *total += 1,
            None => contagem.push((nome, 1)),
        }
    }
    contagem.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    contagem.truncate(max);
    contagem
}

/// Próximos dias, a partir de amanhã, com pelo menos um horário livre
/// em alguma sala ativa. Aproximação local: compara a quantidade de
/// reservas do dia com a capacidade total de slots das salas ativas.
pub fn dias_com_horario_livre(
    reservas: &[Reserva],
    salas: &[Sala],
    hoje: NaiveDate,
    janela_dias: u32,
    max: usize,
    abertura: u32,
    fechamento: u32,
) -> Vec<NaiveDate> {
    let ativas = salas.iter().filter(|sala| sala.ativa).count();
    let slots_por_sala = fechamento.saturating_sub(abertura) as usize;
    let capacidade = ativas * slots_por_sala;
    if capacidade == 0 {
        return Vec::new();
    }

    let mut livres = Vec::new();
    for offset in 1..=janela_dias {
        let dia = hoje + Duration::days(i64::from(offset));
        let ocupados = reservas
            .iter()
            .filter(|reserva| reserva.data_hora_inicio.date() == dia)
            .count();
        if ocupados < capacidade {
            livres.push(dia);
            if livres.len() == max {
                break;
            }
        }
    }
    livres
}
