use super::*;

#[test]
fn build_suffix_follows_channel_directory() {
    assert_eq!(build_suffix("/uprod/activeVersion.json"), "PROD");
    assert_eq!(build_suffix("/utest/activeVersion.json"), "PREPROD");
    assert_eq!(build_suffix("https://cdn.example.com/uprod/activeVersion.json"), "PROD");
}

#[test]
fn unity_root_strips_manifest_name() {
    assert_eq!(unity_root_url("/utest/activeVersion.json"), "/utest");
    assert_eq!(unity_root_url("https://cdn.example.com/uprod/activeVersion.json"), "https://cdn.example.com/uprod");
}

#[test]
fn unity_config_derives_all_build_urls() {
    let config = unity_config("/uprod/activeVersion.json", "1.4.2");
    assert_eq!(
        config.loader_url,
        "/uprod/1.4.2/Build/com.starholdinteractive.starhold.1.4.2_WebGL_PROD.loader.js"
    );
    assert_eq!(
        config.code_url,
        "/uprod/1.4.2/Build/com.starholdinteractive.starhold.1.4.2_WebGL_PROD.wasm"
    );
    assert!(config.data_url.ends_with(".data"));
    assert!(config.framework_url.ends_with(".framework.js"));
    assert_eq!(config.streaming_assets_url, "/uprod/1.4.2/StreamingAssets");
    assert_eq!(config.product_version, "1.4.2");
    assert_eq!(config.unity_root_url, "/uprod");
}

#[test]
fn preprod_suffix_lands_in_file_names() {
    let config = unity_config("/utest/activeVersion.json", "0.9.0");
    assert!(config.loader_url.contains("_WebGL_PREPROD.loader.js"));
}
