use data::forms::*;

#[test]
fn test_login_com_senha_vazia() {
    let form = LoginForm {
        username: "maria".into(),
        senha: String::new(),
    };

    let erros = form.valida();
    assert_eq!(erros.len(), 1);
    assert_eq!(erros.get("senha").unwrap(), "A senha é obrigatória.");
}

#[test]
fn test_login_com_campos_vazios_lista_na_ordem() {
    let erros = LoginForm::default().valida();
    let chaves: Vec<_> = erros.keys().copied().collect();
    assert_eq!(chaves, vec!["username", "senha"]);
}

#[test]
fn test_login_valido_nao_tem_erros() {
    let form = LoginForm {
        username: "maria".into(),
        senha: "segredo1".into(),
    };
    assert!(form.valida().is_empty());
}

#[test]
fn test_email_valido_recorte_classico() {
    assert!(email_valido("maria@acme.com.br"));
    assert!(email_valido("a@b.c"));
    assert!(!email_valido("maria"));
    assert!(!email_valido("maria@"));
    assert!(!email_valido("@acme.com"));
    assert!(!email_valido("maria@acme"));
    assert!(!email_valido("maria@.com"));
    assert!(!email_valido("maria@acme."));
    assert!(!email_valido("ma ria@acme.com"));
}

#[test]
fn test_registro_senha_curta_e_longa() {
    let mut form = RegistroForm {
        nome: "Maria Silva".into(),
        username: "maria".into(),
        email: "maria@acme.com.br".into(),
        senha: "12345".into(),
        confirmar_senha: "12345".into(),
    };
    let erros = form.valida();
    assert_eq!(
        erros.get("senha").unwrap(),
        "A senha deve ter pelo menos 6 caracteres."
    );

    form.senha = "x".repeat(73);
    form.confirmar_senha = form.senha.clone();
    let erros = form.valida();
    assert_eq!(
        erros.get("senha").unwrap(),
        "A senha deve ter no máximo 72 caracteres."
    );

    form.senha = "x".repeat(72);
    form.confirmar_senha = form.senha.clone();
    assert!(form.valida().is_empty());
}

#[test]
fn test_registro_confirmacao_diferente() {
    let form = RegistroForm {
        nome: "Maria Silva".into(),
        username: "maria".into(),
        email: "maria@acme.com.br".into(),
        senha: "segredo1".into(),
        confirmar_senha: "segredo2".into(),
    };
    let erros = form.valida();
    assert_eq!(erros.len(), 1);
    assert_eq!(
        erros.get("confirmar_senha").unwrap(),
        "As senhas não coincidem."
    );
}

#[test]
fn test_sala_capacidade_invalida() {
    let mut form = SalaForm {
        nome: "Sala Aquário".into(),
        local: "2º andar".into(),
        capacidade: "-3".into(),
        ..Default::default()
    };
    assert!(form.valida().contains_key("capacidade"));

    form.capacidade = "abc".into();
    assert!(form.valida().contains_key("capacidade"));

    form.capacidade = "12".into();
    assert!(form.valida().is_empty());
    assert_eq!(form.to_input().capacidade, Some(12));
}

#[test]
fn test_sala_to_input_normaliza_opcionais() {
    let form = SalaForm {
        nome: "  Sala Aquário  ".into(),
        local: "2º andar".into(),
        capacidade: "   ".into(),
        descricao: "".into(),
        ativa: true,
    };
    let input = form.to_input();
    assert_eq!(input.nome, "Sala Aquário");
    assert_eq!(input.capacidade, None);
    assert_eq!(input.descricao, None);

    let update = form.to_update();
    assert_eq!(update.ativa, Some(true));
}

#[test]
fn test_reserva_campos_obrigatorios() {
    let erros = ReservaFormData::default().valida();
    let chaves: Vec<_> = erros.keys().copied().collect();
    assert_eq!(chaves, vec!["sala_id", "data", "horario"]);
}

#[test]
fn test_reserva_cafe_exige_descricao() {
    let form = ReservaFormData {
        sala_id: "3".into(),
        data: "2025-03-10".into(),
        horario: "14:00".into(),
        cafe_quantidade: "10".into(),
        ..Default::default()
    };
    let erros = form.valida();
    assert_eq!(erros.len(), 1);
    assert_eq!(
        erros.get("cafe_descricao").unwrap(),
        "Descreva o pedido de café."
    );
}

#[test]
fn test_reserva_link_sem_protocolo() {
    let form = ReservaFormData {
        sala_id: "3".into(),
        data: "2025-03-10".into(),
        horario: "14:00".into(),
        link_meet: "meet.google.com/abc".into(),
        ..Default::default()
    };
    assert!(form.valida().contains_key("link_meet"));
}

#[test]
fn test_reserva_to_input_monta_janela_de_uma_hora() {
    let form = ReservaFormData {
        sala_id: "3".into(),
        data: "2025-03-10".into(),
        horario: "14:00".into(),
        cafe_quantidade: "10".into(),
        cafe_descricao: "Café e água".into(),
        link_meet: "https://meet.google.com/abc".into(),
    };

    let input = form.to_input().expect("formulário válido");
    assert_eq!(input.sala_id, 3);
    assert_eq!(input.data_hora_inicio.to_string(), "2025-03-10 14:00:00");
    assert_eq!(input.data_hora_fim.to_string(), "2025-03-10 15:00:00");
    assert_eq!(input.cafe_quantidade, Some(10));
    assert_eq!(input.cafe_descricao.as_deref(), Some("Café e água"));
}

#[test]
fn test_reserva_invalida_nao_gera_input() {
    let form = ReservaFormData {
        sala_id: "3".into(),
        data: String::new(),
        horario: "14:00".into(),
        ..Default::default()
    };
    assert!(form.to_input().is_none());
}

#[test]
fn test_senha_form_confirmacao_diferente() {
    let form = SenhaForm {
        senha_atual: "antiga1".into(),
        nova_senha: "segredo1".into(),
        confirmar_senha: "segredo9".into(),
    };
    let erros = form.valida();
    assert_eq!(
        erros.get("confirmar_senha").unwrap(),
        "As senhas não coincidem."
    );
}

#[test]
fn test_usuario_form_senha_opcional_na_edicao() {
    let mut form = UsuarioForm {
        nome: "Maria Silva".into(),
        username: "maria".into(),
        email: "maria@acme.com.br".into(),
        senha: String::new(),
        confirmar_senha: String::new(),
        admin: false,
        exigir_senha: false,
    };
    assert!(form.valida().is_empty());

    form.senha = "123".into();
    form.confirmar_senha = "123".into();
    assert!(form.valida().contains_key("senha"));

    form.exigir_senha = true;
    form.senha = String::new();
    form.confirmar_senha = String::new();
    assert!(form.valida().contains_key("senha"));
}

#[test]
fn test_usuario_form_confirmacao_so_quando_ha_senha() {
    let mut form = UsuarioForm {
        nome: "Maria Silva".into(),
        username: "maria".into(),
        email: "maria@acme.com.br".into(),
        senha: "segredo1".into(),
        confirmar_senha: "segredo2".into(),
        admin: true,
        exigir_senha: true,
    };
    assert_eq!(
        form.valida().get("confirmar_senha").unwrap(),
        "As senhas não coincidem."
    );

    // Na edição, senha em branco dispensa a confirmação.
    form.exigir_senha = false;
    form.senha = String::new();
    form.confirmar_senha = String::new();
    assert!(form.valida().is_empty());
}
