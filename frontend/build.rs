use std::{
    collections::HashMap,
    env,
    fs::{self, read_to_string},
};

use handlebars::Handlebars;
use konst::eq_str;

enum SiteEnv {
    Prod,
    Beta,
    Local,
}

const fn site_env(env: Option<&str>) -> SiteEnv {
    match env {
        Some(env) if eq_str(env, "prod") => SiteEnv::Prod,
        Some(env) if eq_str(env, "beta") => SiteEnv::Beta,
        _ => SiteEnv::Local,
    }
}

fn process_html_template(env_name: &str) -> anyhow::Result<()> {
    const INDEX_FILE: &str = "index.html";

    let mut hb = Handlebars::new();
    hb.register_template_file("template", "index.html.hbs")?;

    let mut data: HashMap<&str, &str> = HashMap::new();
    data.insert("release", env!("CARGO_PKG_VERSION"));
    data.insert("env", env_name);

    let content = hb.render("template", &data)?;

    if file_content_changed(INDEX_FILE, &content) {
        fs::write(INDEX_FILE, content)?;
    }

    Ok(())
}

fn file_content_changed(path: &str, content: &str) -> bool {
    read_to_string(path).map_or(true, |current_content| content != current_content)
}

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed=index.html.hbs");
    println!("cargo:rerun-if-env-changed=SITE_ENV");

    let env_name = match site_env(env::var("SITE_ENV").ok().as_deref()) {
        SiteEnv::Prod => "prod",
        SiteEnv::Beta => "beta",
        SiteEnv::Local => "local",
    };

    println!("cargo:warning=env is {env_name}");
    println!("cargo:rustc-env=SITE_ENV={env_name}");

    process_html_template(env_name)
}
