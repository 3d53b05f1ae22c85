//! Unity WebGL boot plumbing for the play page.
//!
//! DESIGN
//! ======
//! The game build is published next to the site under a versioned directory
//! (`/uprod/` for production, `/utest/` otherwise) with an
//! `activeVersion.json` manifest naming the build to load. URL derivation is
//! pure so it can be unit-tested; everything that touches the DOM or the
//! Unity loader runtime is hydrate-only.

#[cfg(test)]
#[path = "unity_test.rs"]
mod unity_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

pub const COMPANY_NAME: &str = "Starhold Interactive";
pub const PRODUCT_NAME: &str = "Starhold";

const ACTIVE_VERSION_FILE: &str = "activeVersion.json";

/// All URLs the Unity loader needs for one published build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnityConfig {
    pub loader_url: String,
    pub data_url: String,
    pub framework_url: String,
    pub code_url: String,
    pub streaming_assets_url: String,
    pub product_version: String,
    pub unity_root_url: String,
}

/// Where to fetch the active-version manifest.
///
/// `PUBLIC_UNITY_ACTIVE_VERSION_URL` overrides; otherwise the production
/// channel is selected by `PUBLIC_ENV`.
#[must_use]
pub fn active_version_url() -> String {
    if let Some(url) = option_env!("PUBLIC_UNITY_ACTIVE_VERSION_URL") {
        return url.to_owned();
    }
    if option_env!("PUBLIC_ENV") == Some("production") {
        format!("/uprod/{ACTIVE_VERSION_FILE}")
    } else {
        format!("/utest/{ACTIVE_VERSION_FILE}")
    }
}

/// Build channel suffix embedded in the published file names.
#[must_use]
pub fn build_suffix(active_version_url: &str) -> &'static str {
    if active_version_url.contains("/uprod/") { "PROD" } else { "PREPROD" }
}

/// Root directory of the Unity deployment for a given manifest URL.
#[must_use]
pub fn unity_root_url(active_version_url: &str) -> String {
    active_version_url
        .strip_suffix(ACTIVE_VERSION_FILE)
        .map_or_else(|| active_version_url.to_owned(), |root| root.trim_end_matches('/').to_owned())
}

/// Derive the full loader configuration for `version`.
#[must_use]
pub fn unity_config(active_version_url: &str, version: &str) -> UnityConfig {
    let root = unity_root_url(active_version_url);
    let suffix = build_suffix(active_version_url);
    let base_name = format!("com.starholdinteractive.starhold.{version}_WebGL_{suffix}");
    let version_root = format!("{root}/{version}");
    let build_root = format!("{version_root}/Build");

    UnityConfig {
        loader_url: format!("{build_root}/{base_name}.loader.js"),
        data_url: format!("{build_root}/{base_name}.data"),
        framework_url: format!("{build_root}/{base_name}.framework.js"),
        code_url: format!("{build_root}/{base_name}.wasm"),
        streaming_assets_url: format!("{version_root}/StreamingAssets"),
        product_version: version.to_owned(),
        unity_root_url: root,
    }
}

/// Fetch and parse the active-version manifest. Browser only.
///
/// # Errors
///
/// Returns a display string when the manifest is unreachable or malformed.
pub async fn fetch_active_version(url: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct ActiveVersion {
            version: String,
        }

        let resp = gloo_net::http::Request::get(url)
            .header("Cache-Control", "no-store")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("active version request failed: {}", resp.status()));
        }
        let body: ActiveVersion = resp.json().await.map_err(|e| e.to_string())?;
        let version = body.version.trim().to_owned();
        if version.is_empty() {
            return Err("missing version in activeVersion.json".to_owned());
        }
        Ok(version)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available on server".to_owned())
    }
}

/// Inject the Unity loader script and create the engine instance on
/// `canvas`, reporting load progress and the final outcome.
///
/// The created instance is kept on `window.unityInstance` so the page can
/// quit it on cleanup and the fullscreen control can reach it.
#[cfg(feature = "hydrate")]
pub fn boot(
    config: &UnityConfig,
    canvas: &web_sys::HtmlCanvasElement,
    on_progress: impl Fn(f64) + 'static,
    on_done: impl Fn(Result<(), String>) + Clone + 'static,
) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        on_done(Err("no document".to_owned()));
        return;
    };
    let Ok(element) = document.create_element("script") else {
        on_done(Err("could not create loader script element".to_owned()));
        return;
    };
    let Ok(script) = element.dyn_into::<web_sys::HtmlScriptElement>() else {
        on_done(Err("could not create loader script element".to_owned()));
        return;
    };
    script.set_src(&config.loader_url);
    script.set_async(true);

    let runtime_config = runtime_config_js(config);
    let canvas = canvas.clone();
    let done = on_done.clone();
    let onload = Closure::once(move || {
        wasm_bindgen_futures::spawn_local(async move {
            done(create_instance(&canvas, &runtime_config, on_progress).await);
        });
    });
    script.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let done = on_done;
    let onerror = Closure::once(move || {
        done(Err("failed to load Unity loader script".to_owned()));
    });
    script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    if let Some(body) = document.body() {
        let _ = body.append_child(&script);
    }
}

#[cfg(feature = "hydrate")]
fn runtime_config_js(config: &UnityConfig) -> js_sys::Object {
    let obj = js_sys::Object::new();
    let set = |key: &str, value: &JsValue| {
        let _ = js_sys::Reflect::set(&obj, &JsValue::from_str(key), value);
    };
    set("dataUrl", &JsValue::from_str(&config.data_url));
    set("frameworkUrl", &JsValue::from_str(&config.framework_url));
    set("codeUrl", &JsValue::from_str(&config.code_url));
    set("streamingAssetsUrl", &JsValue::from_str(&config.streaming_assets_url));
    set("companyName", &JsValue::from_str(COMPANY_NAME));
    set("productName", &JsValue::from_str(PRODUCT_NAME));
    set("productVersion", &JsValue::from_str(&config.product_version));
    set("matchWebGLToCanvasSize", &JsValue::TRUE);
    set("autoSyncPersistentDataPath", &JsValue::TRUE);
    obj
}

#[cfg(feature = "hydrate")]
async fn create_instance(
    canvas: &web_sys::HtmlCanvasElement,
    runtime_config: &js_sys::Object,
    on_progress: impl Fn(f64) + 'static,
) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    let factory = js_sys::Reflect::get(&window, &JsValue::from_str("createUnityInstance"))
        .ok()
        .filter(|v| v.is_function())
        .map(js_sys::Function::from)
        .ok_or_else(|| "createUnityInstance is not defined".to_owned())?;

    let progress = Closure::wrap(Box::new(move |p: f64| on_progress(p)) as Box<dyn Fn(f64)>);
    let canvas_js: &JsValue = canvas.as_ref();
    let config_js: &JsValue = runtime_config.as_ref();
    let promise = factory
        .call3(&JsValue::NULL, canvas_js, config_js, progress.as_ref())
        .map_err(|e| format!("{e:?}"))?;
    progress.forget();

    let instance = wasm_bindgen_futures::JsFuture::from(js_sys::Promise::from(promise))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str("unityInstance"), &instance);
    Ok(())
}

/// Ask the running instance to enter fullscreen.
#[cfg(feature = "hydrate")]
pub fn set_fullscreen() {
    let Some(window) = web_sys::window() else { return };
    let Ok(instance) = js_sys::Reflect::get(&window, &JsValue::from_str("unityInstance")) else {
        return;
    };
    if let Ok(method) = js_sys::Reflect::get(&instance, &JsValue::from_str("SetFullscreen")) {
        if method.is_function() {
            let _ = js_sys::Function::from(method).call1(&instance, &JsValue::from_f64(1.0));
        }
    }
}

/// Quit the running instance, if any, and drop the global handle.
#[cfg(feature = "hydrate")]
pub fn quit() {
    let Some(window) = web_sys::window() else { return };
    let Ok(instance) = js_sys::Reflect::get(&window, &JsValue::from_str("unityInstance")) else {
        return;
    };
    if let Ok(method) = js_sys::Reflect::get(&instance, &JsValue::from_str("Quit")) {
        if method.is_function() {
            let _ = js_sys::Function::from(method).call0(&instance);
        }
    }
    let _ = js_sys::Reflect::delete_property(&window, &JsValue::from_str("unityInstance"));
}
