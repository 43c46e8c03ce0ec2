use github_v3::{client::Payload, Config, Error};
use log::{debug, info};
use reqwest::Method;
use serde_json::Value;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Options {
    #[structopt(short, long, parse(from_os_str), default_value = "github.toml")]
    /// config file to use, skipped when it does not exist
    config: PathBuf,

    #[structopt(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    /// access token, overrides the one of the config file
    token: Option<String>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    #[structopt(name = "authorize-url")]
    /// Print the url starting the OAuth web flow
    AuthorizeUrl {
        #[structopt(long = "scope")]
        scopes: Vec<String>,

        #[structopt(long)]
        state: Option<String>,
    },

    #[structopt(name = "exchange-code")]
    /// Exchange an OAuth code for an access token
    ExchangeCode { code: String },

    #[structopt(name = "rate-limit")]
    /// Show the current rate limit status
    RateLimit,

    #[structopt(name = "repo")]
    /// Show a repository
    Repo { owner: String, repo: String },

    #[structopt(name = "request")]
    /// Send a raw request, e.g. `request get repos/octocat/Hello-World/issues state=closed`
    Request {
        #[structopt(parse(try_from_str = parse_method))]
        method: Method,

        path: String,

        #[structopt(parse(try_from_str = parse_param))]
        params: Vec<(String, String)>,
    },
}

fn parse_method(s: &str) -> Result<Method, String> {
    Method::from_bytes(s.to_uppercase().as_bytes()).map_err(|e| e.to_string())
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("expected key=value, got `{}`", s))?;
    Ok((s[..pos].to_owned(), s[pos + 1..].to_owned()))
}

fn print(value: &Value) -> Result<(), Error> {
    match value {
        Value::String(text) => println!("{}", text),
        other => println!("{}", serde_json::to_string_pretty(other)?),
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    let opts = Options::from_args();

    // set up logging, allowing info level logging by default
    env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = if opts.config.exists() {
        info!("using config {}", opts.config.display());
        Config::from_file(&opts.config)?
    } else {
        debug!("no config at {}", opts.config.display());
        Config::default()
    };

    let client = || {
        let mut builder = config.client_builder();
        if let Some(token) = &opts.token {
            builder = builder.access_token(token.as_str());
        }
        builder.build()
    };

    match &opts.command {
        Command::AuthorizeUrl { scopes, state } => {
            let scopes: Vec<&str> = scopes.iter().map(String::as_str).collect();
            let url = config.auth()?.authorize_url(&scopes, state.as_deref())?;
            println!("{}", url);
        }
        Command::ExchangeCode { code } => {
            let token = config.auth()?.exchange_code(code)?;
            info!("granted scopes: {}", token.scope);
            println!("{}", serde_json::to_string_pretty(&token)?);
        }
        Command::RateLimit => print(&client()?.misc().get_rate_limit()?)?,
        Command::Repo { owner, repo } => print(&client()?.repos().get(owner, repo)?)?,
        Command::Request {
            method,
            path,
            params,
        } => {
            let mut payload = Payload::new();
            for (key, value) in params {
                payload.insert(key.as_str(), value.as_str());
            }
            print(&client()?.request(method.clone(), path, payload)?)?
        }
    }

    Ok(())
}
