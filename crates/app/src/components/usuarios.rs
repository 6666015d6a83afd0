use data::datetime::formata_data;
use data::forms::{ErrosFormulario, UsuarioForm};
use data::paging::{TAMANHO_PADRAO, fatia_pagina};
use data::usuario::{FiltroAdmin, Usuario, UsuarioFiltro, UsuarioInput, filtra_usuarios};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;

use crate::components::confirmacao::ConfirmacaoModal;
use crate::components::formulario::{AlertaErro, ErroCampo};
use crate::components::paginacao::Paginacao;
use crate::components::usuario_modal::EditUsuarioModal;
use crate::sessao::usa_sessao;
use crate::toast::usa_toasts;

/// Administração de usuários. A rota é protegida no cliente: sem o
/// perfil carregado a página espera; sem privilégio ela redireciona.
#[allow(non_snake_case)]
#[component]
pub fn UsuariosPage() -> impl IntoView {
    let sessao = usa_sessao();

    move || match sessao.perfil() {
        None => view! { <p class="text-muted">"Carregando..."</p> }.into_any(),
        Some(perfil) if !perfil.admin => view! { <Redirect path="/"/> }.into_any(),
        Some(_) => view! { <UsuariosConteudo/> }.into_any(),
    }
}

#[allow(non_snake_case)]
#[component]
fn UsuariosConteudo() -> impl IntoView {
    let sessao = usa_sessao();
    let toasts = usa_toasts();
    let limite = sessao.settings().limite_busca;

    let usuarios = RwSignal::new(Vec::<Usuario>::new());
    let carregando = RwSignal::new(true);

    let filtro_nome = RwSignal::new(String::new());
    let filtro_username = RwSignal::new(String::new());
    let filtro_email = RwSignal::new(String::new());
    let filtro_admin = RwSignal::new(FiltroAdmin::Todos.valor().to_string());
    let pagina = RwSignal::new(1usize);
    let tamanho = RwSignal::new(TAMANHO_PADRAO);

    let form_aberto = RwSignal::new(false);
    let nome = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let confirmar_senha = RwSignal::new(String::new());
    let admin = RwSignal::new(false);
    let erros = RwSignal::new(ErrosFormulario::new());
    let falha = RwSignal::new(None::<String>);
    let pendente = RwSignal::new(false);

    let modal_aberto = RwSignal::new(false);
    let editar = RwSignal::new(None::<Usuario>);
    let excluir = RwSignal::new(None::<Usuario>);
    let excluindo = RwSignal::new(false);

    let carrega = move || {
        spawn_local(async move {
            match sessao.gateway().usuarios(0, limite).await {
                Ok(lista) => usuarios.set(lista),
                Err(erro) => toasts.erro(erro.mensagem()),
            }
            carregando.set(false);
        });
    };
    carrega();

    let filtrados = Memo::new(move |_| {
        let filtro = UsuarioFiltro {
            nome: filtro_nome.get(),
            username: filtro_username.get(),
            email: filtro_email.get(),
            admin: filtro_admin.with(|valor| FiltroAdmin::do_valor(valor)),
        };
        usuarios.with(|lista| filtra_usuarios(lista, &filtro))
    });
    let total_filtrados = Signal::derive(move || filtrados.with(|lista| lista.len()));

    let alterna_form = move |_| {
        let abrir = !form_aberto.get_untracked();
        if abrir {
            nome.set(String::new());
            username.set(String::new());
            email.set(String::new());
            senha.set(String::new());
            confirmar_senha.set(String::new());
            admin.set(false);
            erros.set(ErrosFormulario::new());
            falha.set(None);
        }
        form_aberto.set(abrir);
    };

    let ao_criar = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = UsuarioForm {
            nome: nome.get_untracked(),
            username: username.get_untracked(),
            email: email.get_untracked(),
            senha: senha.get_untracked(),
            confirmar_senha: confirmar_senha.get_untracked(),
            admin: admin.get_untracked(),
            exigir_senha: true,
        };
        let validacao = form.valida();
        if !validacao.is_empty() {
            erros.set(validacao);
            return;
        }
        erros.set(ErrosFormulario::new());
        pendente.set(true);
        spawn_local(async move {
            let corpo = UsuarioInput {
                nome: Some(form.nome.trim().to_string()),
                username: form.username.trim().to_string(),
                email: form.email.trim().to_string(),
                password: form.senha.clone(),
                admin: Some(form.admin),
            };
            match sessao.gateway().criar_usuario_admin(&corpo).await {
                Ok(_) => {
                    toasts.sucesso("Usuário criado com sucesso!");
                    falha.set(None);
                    form_aberto.set(false);
                    carrega();
                }
                Err(erro) => {
                    toasts.erro(erro.mensagem());
                    falha.set(Some(erro.mensagem().to_string()));
                }
            }
            pendente.set(false);
        });
    };

    let ao_salvar = Callback::new(move |_: ()| carrega());
    let mensagem_exclusao = Signal::derive(move || {
        excluir
            .with(|valor| valor.as_ref().map(|usuario| usuario.username.clone()))
            .map(|username| format!("Tem certeza que deseja excluir o usuário \"{username}\"?"))
            .unwrap_or_default()
    });
    let confirma_exclusao = Callback::new(move |_| {
        let Some(usuario_id) = excluir.with_untracked(|valor| valor.as_ref().map(|u| u.id))
        else {
            return;
        };
        excluindo.set(true);
        spawn_local(async move {
            match sessao.gateway().deletar_usuario(usuario_id).await {
                Ok(_) => {
                    toasts.sucesso("Usuário excluído com sucesso!");
                    carrega();
                }
                Err(erro) => toasts.erro(erro.mensagem()),
            }
            excluindo.set(false);
            excluir.set(None);
        });
    });
    let cancela_exclusao = Callback::new(move |_| excluir.set(None));

    view! {
        <div class="list-header">
            <h2>"Usuários"</h2>
            <button class="btn" on:click=alterna_form>
                {move || if form_aberto.get() { "Fechar" } else { "Novo Usuário" }}
            </button>
        </div>

        {move || {
            form_aberto
                .get()
                .then(|| {
                    view! {
                        <div class="card">
                            <div class="card-body">
                                <h3 class="card-title">"Novo Usuário"</h3>
                                <AlertaErro mensagem=falha/>
                                <form on:submit=ao_criar>
                                    <div class="form-row">
                                        <div class="form-control">
                                            <label class="label">"Nome *"</label>
                                            <input
                                                class="input"
                                                type="text"
                                                prop:value=move || nome.get()
                                                on:input=move |ev| nome.set(event_target_value(&ev))
                                            />
                                            <ErroCampo erros=erros campo="nome"/>
                                        </div>
                                        <div class="form-control">
                                            <label class="label">"Usuário *"</label>
                                            <input
                                                class="input"
                                                type="text"
                                                prop:value=move || username.get()
                                                on:input=move |ev| {
                                                    username.set(event_target_value(&ev))
                                                }
                                            />
                                            <ErroCampo erros=erros campo="username"/>
                                        </div>
                                        <div class="form-control">
                                            <label class="label">"Email *"</label>
                                            <input
                                                class="input"
                                                type="email"
                                                prop:value=move || email.get()
                                                on:input=move |ev| email.set(event_target_value(&ev))
                                            />
                                            <ErroCampo erros=erros campo="email"/>
                                        </div>
                                    </div>
                                    <div class="form-row">
                                        <div class="form-control">
                                            <label class="label">"Senha *"</label>
                                            <input
                                                class="input"
                                                type="password"
                                                prop:value=move || senha.get()
                                                on:input=move |ev| senha.set(event_target_value(&ev))
                                            />
                                            <ErroCampo erros=erros campo="senha"/>
                                        </div>
                                        <div class="form-control">
                                            <label class="label">"Confirmar senha *"</label>
                                            <input
                                                class="input"
                                                type="password"
                                                prop:value=move || confirmar_senha.get()
                                                on:input=move |ev| {
                                                    confirmar_senha.set(event_target_value(&ev))
                                                }
                                            />
                                            <ErroCampo erros=erros campo="confirmar_senha"/>
                                        </div>
                                        <div class="form-control">
                                            <label class="label">
                                                <input
                                                    class="checkbox"
                                                    type="checkbox"
                                                    prop:checked=move || admin.get()
                                                    on:change=move |ev| {
                                                        admin.set(event_target_checked(&ev))
                                                    }
                                                />
                                                " Administrador"
                                            </label>
                                        </div>
                                    </div>
                                    <div class="row-actions">
                                        <button
                                            type="submit"
                                            class="btn"
                                            disabled=move || pendente.get()
                                        >
                                            {move || {
                                                if pendente.get() { "Criando..." } else { "Criar" }
                                            }}
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    }
                })
        }}

        <div class="card">
            <div class="card-body">
                <div class="form-row">
                    <div class="form-control">
                        <label class="label">"Nome"</label>
                        <input
                            class="input"
                            type="text"
                            prop:value=move || filtro_nome.get()
                            on:input=move |ev| {
                                filtro_nome.set(event_target_value(&ev));
                                pagina.set(1);
                            }
                        />
                    </div>
                    <div class="form-control">
                        <label class="label">"Usuário"</label>
                        <input
                            class="input"
                            type="text"
                            prop:value=move || filtro_username.get()
                            on:input=move |ev| {
                                filtro_username.set(event_target_value(&ev));
                                pagina.set(1);
                            }
                        />
                    </div>
                    <div class="form-control">
                        <label class="label">"Email"</label>
                        <input
                            class="input"
                            type="text"
                            prop:value=move || filtro_email.get()
                            on:input=move |ev| {
                                filtro_email.set(event_target_value(&ev));
                                pagina.set(1);
                            }
                        />
                    </div>
                    <div class="form-control">
                        <label class="label">"Admin"</label>
                        <select
                            class="select"
                            prop:value=move || filtro_admin.get()
                            on:change=move |ev| {
                                filtro_admin.set(event_target_value(&ev));
                                pagina.set(1);
                            }
                        >
                            <option value="todos">"Todos"</option>
                            <option value="sim">"Sim"</option>
                            <option value="nao">"Não"</option>
                        </select>
                    </div>
                </div>
            </div>
        </div>

        <div class="card">
            <div class="card-body">
                {move || {
                    if carregando.get() {
                        view! { <p class="text-muted">"Carregando usuários..."</p> }.into_any()
                    } else if total_filtrados.get() == 0 {
                        view! { <p class="text-muted">"Nenhum usuário encontrado."</p> }
                            .into_any()
                    } else {
                        view! {
                            <table class="table table-zebra">
                                <thead>
                                    <tr>
                                        <th>"Nome"</th>
                                        <th>"Usuário"</th>
                                        <th>"Email"</th>
                                        <th>"Admin"</th>
                                        <th>"Criado em"</th>
                                        <th>"Ações"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        filtrados
                                            .with(|lista| {
                                                fatia_pagina(lista, pagina.get(), tamanho.get())
                                            })
                                            .into_iter()
                                            .map(|usuario| linha(
                                                usuario,
                                                editar,
                                                modal_aberto,
                                                excluir,
                                            ))
                                            .collect_view()
                                    }}
                                </tbody>
                            </table>
                            <Paginacao pagina=pagina tamanho=tamanho total_itens=total_filtrados/>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>

        <EditUsuarioModal aberto=modal_aberto usuario=editar ao_salvar=ao_salvar/>
        <ConfirmacaoModal
            aberto=Signal::derive(move || excluir.with(|valor| valor.is_some()))
            mensagem=mensagem_exclusao
            ocupado=excluindo
            ao_confirmar=confirma_exclusao
            ao_cancelar=cancela_exclusao
        />
    }
}

fn linha(
    usuario: Usuario,
    editar: RwSignal<Option<Usuario>>,
    modal_aberto: RwSignal<bool>,
    excluir: RwSignal<Option<Usuario>>,
) -> impl IntoView {
    let nome = usuario.nome.clone().unwrap_or_else(|| "-".to_string());
    let criado_em = usuario
        .created_at
        .map(|dt| formata_data(dt.date()))
        .unwrap_or_else(|| "-".to_string());
    let admin = usuario.admin;
    let para_editar = usuario.clone();
    let para_excluir = usuario.clone();

    view! {
        <tr>
            <td>{nome}</td>
            <td>{usuario.username.clone()}</td>
            <td>{usuario.email.clone()}</td>
            <td>
                {if admin {
                    view! { <span class="badge badge-info">"Sim"</span> }
                } else {
                    view! { <span class="badge badge-neutral">"Não"</span> }
                }}
            </td>
            <td>{criado_em}</td>
            <td class="row-actions">
                <button
                    class="btn btn-sm btn-outline"
                    on:click=move |_| {
                        editar.set(Some(para_editar.clone()));
                        modal_aberto.set(true);
                    }
                >
                    "Editar"
                </button>
                <button
                    class="btn btn-sm btn-error"
                    on:click=move |_| excluir.set(Some(para_excluir.clone()))
                >
                    "Excluir"
                </button>
            </td>
        </tr>
    }
}
