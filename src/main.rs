use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use docqa::{
  credential, display, templates, Dispatcher, Document, PromptChoice,
  Provider, QaConfig, Submission,
};

/// Ask a hosted LLM about a text document
#[derive(Parser, Debug)]
#[command(name = "docqa")]
#[command(about = "Ask questions about text/markdown documents", long_about = None)]
struct Args
{   /// Uploaded file to analyze (.txt or .md)
    #[arg(short, long, conflicts_with = "dir")]
    file: Option<PathBuf>

  , /// Directory whose .txt/.md files are concatenated
    #[arg(short, long)]
    dir: Option<PathBuf>

  , /// Prompt template label (see --list-templates)
    #[arg(short, long)]
    template: Option<String>

  , /// Question, or research theme when a template is used
    #[arg(short, long, default_value = "")]
    question: String

  , /// Print the available templates and exit
    #[arg(long)]
    list_templates: bool

  , /// API key; falls back to the provider's environment variable
    #[arg(long)]
    api_key: Option<String>

  , /// Prompt for the API key if none was found
    #[arg(long)]
    ask_key: bool

  , /// Provider: anthropic or mistral
    #[arg(long)]
    provider: Option<Provider>

  , /// Model identifier
    #[arg(long)]
    model: Option<String>

  , /// Maximum output tokens
    #[arg(long)]
    max_tokens: Option<usize>

  , /// Override the API base URL
    #[arg(long)]
    api_base: Option<String>

  , /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>

  , /// Enable debug logging
    #[arg(short, long)]
    verbose: bool
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode
{   let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or(level)
    ).init();

    match run(args).await
    {   Ok(()) => ExitCode::SUCCESS
      , Err(e) => {
          error!("{}", e);
          eprintln!("error: {}", e);
          ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), docqa::Error>
{   let mut stdout = std::io::stdout().lock();

    if args.list_templates
    {   for label in templates::labels()
        {   writeln!(stdout, "{}", label)?;
        }
        return Ok(());
    }

    let config = resolve_config(&args)?;
    debug!("Using config: {:?}", config);

    let document = match &args.file
    {   Some(path) => Document::from_upload_path(path)?
      , None => {
          let dir = args.dir.as_ref().unwrap_or(&config.documents_dir);
          Document::from_directory(dir)?
        }
    };

    let choice = match &args.template
    {   Some(label) => PromptChoice::Template(templates::find_or_err(label)?)
      , None => PromptChoice::Custom
    };

    let mut key = credential::resolve(
      args.api_key.as_deref()
    , config.api_key_env()
    );
    if key.is_none() && args.ask_key
    {   let pending = Submission
        {   provider: config.provider
          , document: &document
          , choice
          , question: &args.question
          , credential: None
        };
        if let Err(blocked) = pending.check_input()
        {   display::show_blocked(&mut stdout, &blocked)?;
            return Ok(());
        }
        key = if std::io::stdin().is_terminal()
        {   credential::prompt_masked(config.provider)?
        } else
        {   credential::prompt_for(
              config.provider
            , &mut std::io::stdin().lock()
            , &mut std::io::stderr()
            )?
        };
    }

    let submission = Submission
    {   provider: config.provider
      , document: &document
      , choice
      , question: &args.question
      , credential: key.as_ref()
    };

    let ready = match submission.check()
    {   Ok(ready) => ready
      , Err(blocked) => {
          display::show_blocked(&mut stdout, &blocked)?;
          return Ok(());
        }
    };

    let dispatcher = Dispatcher::from_config(&config, Some(ready.credential))?;
    match dispatcher.answer(ready.document, &ready.instruction).await
    {   Ok(response) => display::show_answer(&mut stdout, &response)?
      , Err(e) => display::show_failure(&mut stdout, &e)?
    }
    Ok(())
}

/// Config file (or defaults) with command-line overrides applied
fn resolve_config(args: &Args) -> Result<QaConfig, docqa::Error>
{   let mut config = match &args.config
    {   Some(path) => QaConfig::load(path)?
      , None => QaConfig::default()
    };

    if let Some(provider) = args.provider
    {   if provider != config.provider
        {   config.provider = provider;
            config.api_key_env = None;
            config.api_base = None;
            if args.model.is_none()
            {   config.model = None;
            }
        }
    }
    if let Some(model) = &args.model
    {   config.model = Some(model.clone());
    }
    if let Some(max_tokens) = args.max_tokens
    {   config.max_tokens = max_tokens;
    }
    if let Some(api_base) = &args.api_base
    {   config.api_base = Some(api_base.clone());
    }

    config.validate()?;
    Ok(config)
}
