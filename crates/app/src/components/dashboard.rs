use chrono::Local;
use data::dashboard::{dias_com_horario_livre, reservas_stats, salas_stats, top_salas};
use data::datetime::{data_iso, formata_data, nome_dia_semana};
use data::reserva::Reserva;
use data::sala::Sala;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::sessao::usa_sessao;
use crate::toast::usa_toasts;

const JANELA_DIAS: u32 = 14;
const MAX_TOP_SALAS: usize = 5;
const MAX_DIAS_LIVRES: usize = 5;

/// Painel inicial: totais, ocupação por sala e os próximos dias com
/// horário livre. Tudo é derivado dos dois lotes buscados na montagem.
#[allow(non_snake_case)]
#[component]
pub fn DashboardPage() -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();
    let settings = sessao.settings();
    let limite_busca = settings.limite_busca;
    let abertura = settings.abertura;
    let fechamento = settings.fechamento;

    let salas = RwSignal::new(Vec::<Sala>::new());
    let reservas = RwSignal::new(Vec::<Reserva>::new());
    let carregando = RwSignal::new(true);

    spawn_local(async move {
        let gateway = sessao.gateway();
        match gateway.salas(0, limite_busca, None).await {
            Ok(lista) => salas.set(lista),
            Err(erro) => toasts.erro(erro.mensagem()),
        }
        match gateway.reservas(0, limite_busca).await {
            Ok(lista) => reservas.set(lista),
            Err(erro) => toasts.erro(erro.mensagem()),
        }
        carregando.set(false);
    });

    let hoje = Local::now().date_naive();
    let stats_salas = Memo::new(move |_| salas.with(|lista| salas_stats(lista)));
    let stats_reservas =
        Memo::new(move |_| reservas.with(|lista| reservas_stats(lista, hoje)));
    let mais_reservadas = Memo::new(move |_| {
        reservas.with(|r| salas.with(|s| top_salas(r, s, MAX_TOP_SALAS)))
    });
    let dias_livres = Memo::new(move |_| {
        reservas.with(|r| {
            salas.with(|s| {
                dias_com_horario_livre(
                    r,
                    s,
                    hoje,
                    JANELA_DIAS,
                    MAX_DIAS_LIVRES,
                    abertura,
                    fechamento,
                )
            })
        })
    });

    view! {
        <h2>"Dashboard"</h2>
        {move || {
            if carregando.get() {
                view! { <p class="text-muted">"Carregando dashboard..."</p> }.into_any()
            } else {
                view! {
                    <div class="stats-grid">
                        <div class="card">
                            <div class="card-body">
                                <div class="stat-title">"Total de Salas"</div>
                                <div class="stat-value">{move || stats_salas.get().total}</div>
                                <div class="text-muted">
                                    {move || {
                                        let stats = stats_salas.get();
                                        format!("{} ativas, {} inativas", stats.ativas, stats.inativas)
                                    }}
                                </div>
                            </div>
                        </div>
                        <div class="card">
                            <div class="card-body">
                                <div class="stat-title">"Total de Reservas"</div>
                                <div class="stat-value">{move || stats_reservas.get().total}</div>
                                <div class="text-muted">
                                    {move || {
                                        let stats = stats_reservas.get();
                                        format!("{} hoje, {} esta semana", stats.hoje, stats.na_semana)
                                    }}
                                </div>
                            </div>
                        </div>
                        <div class="card">
                            <div class="card-body">
                                <div class="stat-title">"Salas Ativas"</div>
                                <div class="stat-value">{move || stats_salas.get().ativas}</div>
                                <div class="text-muted">
                                    {move || {
                                        let stats = stats_salas.get();
                                        if stats.total == 0 {
                                            "0% do total".to_string()
                                        } else {
                                            format!("{}% do total", stats.ativas * 100 / stats.total)
                                        }
                                    }}
                                </div>
                            </div>
                        </div>
                        <div class="card">
                            <div class="card-body">
                                <div class="stat-title">"Reservas Hoje"</div>
                                <div class="stat-value">{move || stats_reservas.get().hoje}</div>
                                <div class="text-muted">{formata_data(hoje)}</div>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-body">
                            <h3 class="card-title">"Status das Salas"</h3>
                            {move || {
                                let stats = stats_salas.get();
                                if stats.total == 0 {
                                    view! {
                                        <p class="text-muted">"Nenhuma sala cadastrada"</p>
                                    }
                                        .into_any()
                                } else {
                                    let pct_ativas = stats.ativas * 100 / stats.total;
                                    let pct_inativas = stats.inativas * 100 / stats.total;
                                    view! {
                                        <div class="list-item">
                                            <span>"Ativas"</span>
                                            <div class="progress-track">
                                                <div
                                                    class="progress-fill"
                                                    style:width=format!("{pct_ativas}%")
                                                ></div>
                                            </div>
                                            <span>{stats.ativas}</span>
                                        </div>
                                        <div class="list-item">
                                            <span>"Inativas"</span>
                                            <div class="progress-track">
                                                <div
                                                    class="progress-fill"
                                                    style:width=format!("{pct_inativas}%")
                                                ></div>
                                            </div>
                                            <span>{stats.inativas}</span>
                                        </div>
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-body">
                            <h3 class="card-title">"Top 5 Salas Mais Reservadas"</h3>
                            {move || {
                                let top = mais_reservadas.get();
                                if top.is_empty() {
                                    view! {
                                        <p class="text-muted">"Nenhuma reserva encontrada"</p>
                                    }
                                        .into_any()
                                } else {
                                    let maior = top.first().map(|(_, n)| *n).unwrap_or(1);
                                    top.into_iter()
                                        .map(|(nome, total)| {
                                            let pct = total * 100 / maior.max(1);
                                            view! {
                                                <div class="list-item">
                                                    <span>{nome}</span>
                                                    <div class="progress-track">
                                                        <div
                                                            class="progress-fill"
                                                            style:width=format!("{pct}%")
                                                        ></div>
                                                    </div>
                                                    <span>{total}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-body">
                            <h3 class="card-title">"Próximos Dias Livres"</h3>
                            {move || {
                                let dias = dias_livres.get();
                                if dias.is_empty() {
                                    view! {
                                        <p class="text-muted">
                                            "Não há dias livres nos próximos 14 dias"
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    dias.into_iter()
                                        .map(|dia| {
                                            let destino =
                                                format!("/reservas/nova?data={}", data_iso(dia));
                                            view! {
                                                <div class="list-item">
                                                    <span>
                                                        {format!(
                                                            "{}, {}",
                                                            nome_dia_semana(dia),
                                                            formata_data(dia),
                                                        )}
                                                    </span>
                                                    <span class="badge badge-success">"Disponível"</span>
                                                    <a class="btn btn-sm" href=destino>
                                                        "Reservar"
                                                    </a>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </div>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
