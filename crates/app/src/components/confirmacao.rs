use leptos::prelude::*;

/// Diálogo de exclusão em duas etapas. O texto vem pronto do chamador;
/// os botões ficam travados enquanto a exclusão está em andamento.
#[allow(non_snake_case)]
#[component]
pub fn ConfirmacaoModal(
    #[prop(into)] aberto: Signal<bool>,
    #[prop(into)] mensagem: Signal<String>,
    #[prop(into)] ocupado: Signal<bool>,
    ao_confirmar: Callback<()>,
    ao_cancelar: Callback<()>,
) -> impl IntoView {
    move || {
        aberto.get().then(|| {
            view! {
                <div class="modal">
                    <div class="modal-box">
                        <h3>"Confirmar Exclusão"</h3>
                        <p>{mensagem.get()}</p>
                        <p class="text-muted">"Esta ação não pode ser desfeita."</p>
                        <div class="modal-action">
                            <button
                                class="btn btn-outline"
                                disabled=move || ocupado.get()
                                on:click=move |_| ao_cancelar.run(())
                            >
                                "Cancelar"
                            </button>
                            <button
                                class="btn btn-error"
                                disabled=move || ocupado.get()
                                on:click=move |_| ao_confirmar.run(())
                            >
                                {move || if ocupado.get() { "Excluindo..." } else { "Excluir" }}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
