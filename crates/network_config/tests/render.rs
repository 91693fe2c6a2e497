use network_config::{ConfigProvider, render::write_hardhat_config, render_hardhat_config};

#[test]
fn bundled_config_renders_as_hardhat_file() {
    let provider = ConfigProvider::bundled().unwrap();

    assert_eq!(
        render_hardhat_config(provider.config()),
        include_str!("fixtures/hardhat.config.js")
    );
}

#[test]
fn renders_every_network_with_quoted_names_and_headers() {
    let provider = ConfigProvider::from_toml_str(include_str!("fixtures/networks.toml")).unwrap();

    let mut rendered = String::new();
    write_hardhat_config(&mut rendered, provider.config()).unwrap();

    assert!(rendered.contains("    defaultNetwork: \"avax-fork\",\n"));
    assert!(rendered.contains("        localhost: {\n"));
    assert!(rendered.contains("        \"avax-fork\": {\n"));
    assert!(rendered.contains("            initialBaseFeePerGas: 1000000000,\n"));
    assert!(rendered.contains("                blockNumber: 7300000,\n"));
    assert!(
        rendered.contains("                    \"Authorization\": \"Bearer 0123456789abcdef\",\n")
    );

    // The localhost profile comes first and does not fork.
    let localhost_end = rendered.find("\"avax-fork\": {").unwrap();
    assert!(!rendered[..localhost_end].contains("forking"));
}
