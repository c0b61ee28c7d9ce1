use konst::eq_str;

pub enum SiteEnv {
    Prod,
    Beta,
    Local,
}

pub const fn site_env(env: Option<&str>) -> SiteEnv {
    match env {
        Some(env) if eq_str(env, "prod") => SiteEnv::Prod,
        Some(env) if eq_str(env, "beta") => SiteEnv::Beta,
        _ => SiteEnv::Local,
    }
}

pub const SITE_ENV: &str = env!("SITE_ENV");

pub const fn log_level(env: &SiteEnv) -> log::Level {
    match env {
        SiteEnv::Prod | SiteEnv::Beta => log::Level::Info,
        SiteEnv::Local => log::Level::Debug,
    }
}
