use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use regatta::api::enquiries::{self, EnquiryRequest, EnquiryScope, ScoringEnquiries};
use regatta::api::entries::{self, EntryUpdate};
use regatta::api::news::{self, NewsDraft};
use regatta::api::notices::{self, NoticeDraft, NoticeScope, Notices};
use regatta::api::protests::{self, ProtestDecision, ProtestFiling, ProtestScope, Protests};
use regatta::api::regattas;
use regatta::api::results;
use regatta::api::rule42::{self, Rule42, Rule42Report, Rule42Scope};
use regatta::calendar::{self, CalendarError};
use regatta::config::ConfigError;
use regatta::lists::{ListResource, PageFetcher, UnknownScope};
use regatta::models::Credentials;
use regatta::{
    ApiError, ClientConfig, FileStorage, GuardDecision, HttpClient, ListQuery, Outcome, PaginatedList, Route,
    RouteGuard, Session, SessionState, SessionStore,
};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("not logged in; run `regatta login` ({0})")]
    NotLoggedIn(Route),
    #[error("session expired; run `regatta login` again ({0})")]
    SessionExpired(Route),
    #[error("this command is not available to your role (home: {0})")]
    Forbidden(Route),
    #[error("could not restore the stored session; the backend is unreachable or failing")]
    RestoreFailed,
    #[error("no active regatta; pass --regatta or run `regatta switch <id>`")]
    MissingRegatta,
    #[error("{month} {year} has no day {day}")]
    NoSuchDay { year: i32, month: time::Month, day: u8 },
    #[error(transparent)]
    Scope(#[from] UnknownScope),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error("failed to read {path}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "regatta", about = "Regatta management platform CLI")]
struct Cli {
    /// Backend base URL; overrides REGATTA_API_URL.
    #[arg(long)]
    api_url: Option<String>,

    /// Directory holding the persisted session; overrides REGATTA_STATE_DIR.
    #[arg(long)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "REGATTA_PASSWORD", hide_env_values = true)]
        password: String,
        /// Scope the session to this regatta.
        #[arg(long)]
        regatta: Option<i64>,
    },
    Logout,
    Whoami,
    /// Move the session to another regatta.
    Switch {
        regatta_id: i64,
    },
    Regattas(RegattasCommand),
    Entries(EntriesCommand),
    Protests(ProtestsCommand),
    Rule42(Rule42Command),
    Notices(NoticesCommand),
    Enquiries(EnquiriesCommand),
    News(NewsCommand),
    Results(ResultsCommand),
}

#[derive(Args, Debug, Clone)]
struct ListArgs {
    /// Regatta to list for; defaults to the session's active regatta.
    #[arg(long)]
    regatta: Option<i64>,
    #[arg(long)]
    scope: Option<String>,
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    limit: Option<u32>,
    /// Keep loading until this many pages or the end of the list.
    #[arg(long, default_value_t = 1)]
    pages: u32,
}

#[derive(Args, Debug)]
struct RegattasCommand {
    #[command(subcommand)]
    command: RegattasSubcommand,
}

#[derive(Subcommand, Debug)]
enum RegattasSubcommand {
    List,
    Show {
        regatta_id: i64,
    },
    Calendar {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u8>,
        /// Print the regattas running on this day of the month instead of the grid.
        #[arg(long)]
        day: Option<u8>,
    },
}

#[derive(Args, Debug)]
struct EntriesCommand {
    #[command(subcommand)]
    command: EntriesSubcommand,
}

#[derive(Subcommand, Debug)]
enum EntriesSubcommand {
    List {
        #[arg(long)]
        regatta: Option<i64>,
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        entry_id: i64,
    },
    Mine {
        #[arg(long)]
        regatta: Option<i64>,
    },
    Update {
        entry_id: i64,
        #[arg(long)]
        sail_number: Option<String>,
        #[arg(long)]
        boat_name: Option<String>,
        #[arg(long)]
        skipper_name: Option<String>,
        #[arg(long)]
        class_name: Option<String>,
        #[arg(long)]
        club: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        paid: Option<bool>,
    },
}

#[derive(Args, Debug)]
struct ProtestsCommand {
    #[command(subcommand)]
    command: ProtestsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProtestsSubcommand {
    List(ListArgs),
    File {
        #[arg(long)]
        regatta: Option<i64>,
        #[arg(long)]
        race: u32,
        /// Entry id of a protested boat; repeat for several.
        #[arg(long = "against", required = true)]
        against: Vec<i64>,
        #[arg(long)]
        description: String,
        #[arg(long = "rule")]
        rules: Vec<String>,
        #[arg(long)]
        entry: Option<i64>,
        #[arg(long)]
        attachment: Option<PathBuf>,
    },
    Decide {
        protest_id: i64,
        #[arg(long)]
        status: String,
        #[arg(long)]
        decision: Option<String>,
        #[arg(long)]
        hearing_at: Option<String>,
    },
}

#[derive(Args, Debug)]
struct Rule42Command {
    #[command(subcommand)]
    command: Rule42Subcommand,
}

#[derive(Subcommand, Debug)]
enum Rule42Subcommand {
    List(ListArgs),
    Create {
        #[arg(long)]
        regatta: Option<i64>,
        #[arg(long)]
        entry: i64,
        #[arg(long)]
        race: u32,
        #[arg(long)]
        infringement: String,
        #[arg(long)]
        penalty: Option<String>,
        #[arg(long)]
        observations: Option<String>,
    },
}

#[derive(Args, Debug)]
struct NoticesCommand {
    #[command(subcommand)]
    command: NoticesSubcommand,
}

#[derive(Subcommand, Debug)]
enum NoticesSubcommand {
    List(ListArgs),
    Publish {
        #[arg(long)]
        regatta: Option<i64>,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: Option<String>,
        /// `official` or `general`.
        #[arg(long, default_value = "official")]
        category: String,
        #[arg(long)]
        document: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct EnquiriesCommand {
    #[command(subcommand)]
    command: EnquiriesSubcommand,
}

#[derive(Subcommand, Debug)]
enum EnquiriesSubcommand {
    List(ListArgs),
    Submit {
        #[arg(long)]
        regatta: Option<i64>,
        #[arg(long)]
        race: u32,
        #[arg(long)]
        change: String,
        #[arg(long)]
        entry: Option<i64>,
    },
}

#[derive(Args, Debug)]
struct NewsCommand {
    #[command(subcommand)]
    command: NewsSubcommand,
}

#[derive(Subcommand, Debug)]
enum NewsSubcommand {
    List {
        #[arg(long)]
        regatta: Option<i64>,
    },
    Publish {
        #[arg(long)]
        regatta: Option<i64>,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ResultsCommand {
    #[command(subcommand)]
    command: ResultsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ResultsSubcommand {
    List {
        #[arg(long)]
        regatta: Option<i64>,
        #[arg(long)]
        race: Option<u32>,
    },
    Upload {
        #[arg(long)]
        regatta: Option<i64>,
        #[arg(long)]
        race: u32,
        #[arg(long)]
        file: PathBuf,
    },
}

// =============================================================================
// APP
// =============================================================================

struct App {
    store: SessionStore,
    page_size: u32,
}

impl App {
    fn new(cli: &Cli) -> Result<Self, CliError> {
        let mut config = ClientConfig::from_env()?;
        if let Some(url) = &cli.api_url {
            config.api_base_url = ClientConfig::new(url)?.api_base_url;
        }
        if let Some(dir) = &cli.state_dir {
            config.state_dir.clone_from(dir);
        }
        tracing::debug!(api = %config.api_base_url, state_dir = %config.state_dir.display(), "client configured");

        let storage = Arc::new(FileStorage::in_dir(&config.state_dir));
        let http = HttpClient::new(&config, storage)?;
        Ok(Self { store: SessionStore::new(http), page_size: config.page_size })
    }

    fn http(&self) -> &HttpClient {
        self.store.http()
    }

    /// Restore the session and run the guard for a view at `location`.
    async fn enter(&self, guard: RouteGuard, location: &str) -> Result<Session, CliError> {
        // A token that survives a failed restore was never rejected.
        if self.store.restore().await == SessionState::Anonymous && self.store.token().is_some() {
            return Err(CliError::RestoreFailed);
        }
        match guard.watch(self.store.subscribe(), location).resolve().await {
            GuardDecision::Render => self
                .store
                .current()
                .ok_or(CliError::NotLoggedIn(Route::Login { regatta_id: None })),
            GuardDecision::Pending => Err(CliError::NotLoggedIn(Route::Login { regatta_id: None })),
            GuardDecision::Redirect(route @ Route::Login { .. }) => Err(CliError::NotLoggedIn(route)),
            GuardDecision::Redirect(route) => Err(CliError::Forbidden(route)),
        }
    }

    /// Pass a backend result through the 401 interceptor.
    fn settle<T>(&self, result: Result<T, ApiError>, location: &str) -> Result<T, CliError> {
        match self.store.intercept(result, location) {
            Outcome::Ok(value) => Ok(value),
            Outcome::Redirect(route) => Err(CliError::SessionExpired(route)),
            Outcome::Failed(e) => {
                tracing::debug!(status = ?e.status(), location, "backend call failed");
                Err(CliError::Api(e))
            }
        }
    }
}

fn location(path: &str, regatta: Option<i64>) -> String {
    match regatta {
        Some(id) => format!("{path}?regatta_id={id}"),
        None => path.to_owned(),
    }
}

fn active_regatta(explicit: Option<i64>, session: &Session) -> Result<i64, CliError> {
    explicit
        .or_else(|| session.active_regatta_id())
        .ok_or(CliError::MissingRegatta)
}

fn read_file(path: &Path) -> Result<(String, Vec<u8>), CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::ReadFile { path: path.to_owned(), source })?;
    let name = path
        .file_name()
        .map_or_else(|| "upload".to_owned(), |name| name.to_string_lossy().into_owned());
    Ok((name, bytes))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let pretty = serde_json::to_string_pretty(value)?;
    println!("{pretty}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let app = App::new(&cli)?;

    match cli.command {
        Command::Login { email, password, regatta } => run_login(&app, email, password, regatta).await,
        Command::Logout => {
            let target = app.store.logout(None)?;
            print_json(&json!({ "next": target.path() }))
        }
        Command::Whoami => {
            let session = app.enter(RouteGuard::authenticated(), "/dashboard").await?;
            print_json(&session.user)
        }
        Command::Switch { regatta_id } => {
            let here = location("/dashboard", Some(regatta_id));
            app.enter(RouteGuard::authenticated(), &here).await?;
            let session = app.settle(app.store.switch_context(regatta_id).await, &here)?;
            print_json(&session.user)
        }
        Command::Regattas(cmd) => run_regattas(&app, cmd).await,
        Command::Entries(cmd) => run_entries(&app, cmd).await,
        Command::Protests(cmd) => run_protests(&app, cmd).await,
        Command::Rule42(cmd) => run_rule42(&app, cmd).await,
        Command::Notices(cmd) => run_notices(&app, cmd).await,
        Command::Enquiries(cmd) => run_enquiries(&app, cmd).await,
        Command::News(cmd) => run_news(&app, cmd).await,
        Command::Results(cmd) => run_results(&app, cmd).await,
    }
}

async fn run_login(app: &App, email: String, password: String, regatta: Option<i64>) -> Result<(), CliError> {
    let credentials = Credentials { email, password, regatta_id: regatta };
    let target = app.store.authenticate(&credentials).await?;
    let user = app.store.current().map(|session| session.user);
    print_json(&json!({ "user": user, "next": target.path() }))
}

// =============================================================================
// LISTS
// =============================================================================

/// Load `args.pages` pages of `R` and print the accumulated state.
async fn run_list<R>(app: &App, scope: R::Scope, args: &ListArgs, path: &str) -> Result<(), CliError>
where
    R: ListResource,
    R::Item: Serialize,
{
    let here = location(path, args.regatta);
    let session = app.enter(RouteGuard::authenticated(), &here).await?;
    let regatta_id = active_regatta(args.regatta, &session)?;
    let here = location(path, Some(regatta_id));

    let mut query = ListQuery::new(regatta_id, scope, args.limit.unwrap_or(app.page_size));
    if let Some(search) = &args.search {
        query = query.with_search(search);
    }
    let fetcher: Arc<dyn PageFetcher<R>> = Arc::new(app.http().clone());
    let list = PaginatedList::new(fetcher, query);

    app.settle(list.refresh().await, &here)?;
    let mut loaded = 1;
    while loaded < args.pages {
        let state = list.snapshot();
        if !state.has_more || state.error.is_some() {
            break;
        }
        app.settle(list.load_more().await, &here)?;
        loaded += 1;
    }

    let state = list.snapshot();
    print_json(&json!({
        "items": state.items,
        "has_more": state.has_more,
        "cursor": state.cursor.map(|cursor| cursor.to_string()),
        "error": state.error,
    }))
}

fn scope_or_default<S>(raw: Option<&str>) -> Result<S, CliError>
where
    S: std::str::FromStr<Err = UnknownScope> + Default,
{
    match raw {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(S::default()),
    }
}

// =============================================================================
// RESOURCES
// =============================================================================

async fn run_regattas(app: &App, cmd: RegattasCommand) -> Result<(), CliError> {
    if let RegattasSubcommand::Show { regatta_id } = cmd.command {
        let here = format!("/regattas/{regatta_id}");
        app.enter(RouteGuard::authenticated(), &here).await?;
        let regatta = app.settle(regattas::get_regatta(app.http(), regatta_id).await, &here)?;
        return print_json(&regatta);
    }

    let here = "/regattas";
    app.enter(RouteGuard::authenticated(), here).await?;
    let all = app.settle(regattas::list_regattas(app.http()).await, here)?;
    match cmd.command {
        RegattasSubcommand::Calendar { year, month, day } => {
            let today = time::OffsetDateTime::now_utc().date();
            let grid = calendar::month_grid(year.unwrap_or(today.year()), month.unwrap_or(u8::from(today.month())), &all)?;
            let Some(day) = day else {
                print!("{grid}");
                return Ok(());
            };
            let date = grid
                .days()
                .filter_map(|cell| cell.date)
                .find(|date| date.day() == day)
                .ok_or(CliError::NoSuchDay { year: grid.year, month: grid.month, day })?;
            let ids = grid.regattas_on(date);
            let running: Vec<_> = all.iter().filter(|regatta| ids.contains(&regatta.id)).collect();
            print_json(&running)
        }
        RegattasSubcommand::List | RegattasSubcommand::Show { .. } => print_json(&all),
    }
}

async fn run_entries(app: &App, cmd: EntriesCommand) -> Result<(), CliError> {
    match cmd.command {
        EntriesSubcommand::List { regatta, search } => {
            let session = app.enter(RouteGuard::admin_only(), &location("/admin/entries", regatta)).await?;
            let regatta_id = active_regatta(regatta, &session)?;
            let here = location("/admin/entries", Some(regatta_id));
            let found = app.settle(entries::list_entries(app.http(), regatta_id, search.as_deref()).await, &here)?;
            print_json(&found)
        }
        EntriesSubcommand::Show { entry_id } => {
            let here = format!("/entries/{entry_id}");
            app.enter(RouteGuard::authenticated(), &here).await?;
            let entry = app.settle(entries::get_entry(app.http(), entry_id).await, &here)?;
            print_json(&entry)
        }
        EntriesSubcommand::Mine { regatta } => {
            let session = app.enter(RouteGuard::sailor_only(), &location("/entry", regatta)).await?;
            let regatta_id = active_regatta(regatta, &session)?;
            let here = location("/entry", Some(regatta_id));
            let entry = app.settle(entries::my_entry(app.http(), regatta_id).await, &here)?;
            print_json(&entry)
        }
        EntriesSubcommand::Update { entry_id, sail_number, boat_name, skipper_name, class_name, club, status, paid } => {
            let here = format!("/admin/entries/{entry_id}");
            app.enter(RouteGuard::admin_only(), &here).await?;
            let update = EntryUpdate { sail_number, boat_name, skipper_name, class_name, club, status, paid };
            let entry = app.settle(entries::update_entry(app.http(), entry_id, &update).await, &here)?;
            print_json(&entry)
        }
    }
}

async fn run_protests(app: &App, cmd: ProtestsCommand) -> Result<(), CliError> {
    match cmd.command {
        ProtestsSubcommand::List(args) => {
            let scope: ProtestScope = scope_or_default(args.scope.as_deref())?;
            run_list::<Protests>(app, scope, &args, "/protests").await
        }
        ProtestsSubcommand::File { regatta, race, against, description, rules, entry, attachment } => {
            let session = app.enter(RouteGuard::sailor_only(), &location("/protests/new", regatta)).await?;
            let regatta_id = active_regatta(regatta, &session)?;
            let here = location("/protests/new", Some(regatta_id));
            let filing = ProtestFiling {
                race_number: race,
                protestor_entry_id: entry,
                protested_entry_ids: against,
                description,
                rules_alleged: rules,
                attachment: attachment.as_deref().map(read_file).transpose()?,
            };
            let protest = app.settle(protests::file_protest(app.http(), regatta_id, &filing).await, &here)?;
            print_json(&protest)
        }
        ProtestsSubcommand::Decide { protest_id, status, decision, hearing_at } => {
            let here = format!("/admin/protests/{protest_id}");
            app.enter(RouteGuard::admin_only(), &here).await?;
            let decision = ProtestDecision { status, decision, hearing_at };
            let protest = app.settle(protests::decide_protest(app.http(), protest_id, &decision).await, &here)?;
            print_json(&protest)
        }
    }
}

async fn run_rule42(app: &App, cmd: Rule42Command) -> Result<(), CliError> {
    match cmd.command {
        Rule42Subcommand::List(args) => {
            let scope: Rule42Scope = scope_or_default(args.scope.as_deref())?;
            run_list::<Rule42>(app, scope, &args, "/rule42").await
        }
        Rule42Subcommand::Create { regatta, entry, race, infringement, penalty, observations } => {
            let session = app.enter(RouteGuard::admin_only(), &location("/admin/rule42", regatta)).await?;
            let regatta_id = active_regatta(regatta, &session)?;
            let here = location("/admin/rule42", Some(regatta_id));
            let report = Rule42Report { entry_id: entry, race_number: race, infringement, penalty, observations };
            let record = app.settle(rule42::create_rule42(app.http(), regatta_id, &report).await, &here)?;
            print_json(&record)
        }
    }
}

async fn run_notices(app: &App, cmd: NoticesCommand) -> Result<(), CliError> {
    match cmd.command {
        NoticesSubcommand::List(args) => {
            let scope: NoticeScope = scope_or_default(args.scope.as_deref())?;
            run_list::<Notices>(app, scope, &args, "/notices").await
        }
        NoticesSubcommand::Publish { regatta, title, body, category, document } => {
            let session = app.enter(RouteGuard::admin_only(), &location("/admin/notices", regatta)).await?;
            let regatta_id = active_regatta(regatta, &session)?;
            let here = location("/admin/notices", Some(regatta_id));
            let draft = NoticeDraft {
                title,
                body,
                category: category.parse()?,
                document: document.as_deref().map(read_file).transpose()?,
            };
            let notice = app.settle(notices::publish_notice(app.http(), regatta_id, &draft).await, &here)?;
            print_json(&notice)
        }
    }
}

async fn run_enquiries(app: &App, cmd: EnquiriesCommand) -> Result<(), CliError> {
    match cmd.command {
        EnquiriesSubcommand::List(args) => {
            let scope: EnquiryScope = scope_or_default(args.scope.as_deref())?;
            run_list::<ScoringEnquiries>(app, scope, &args, "/scoring-enquiries").await
        }
        EnquiriesSubcommand::Submit { regatta, race, change, entry } => {
            let session = app.enter(RouteGuard::sailor_only(), &location("/scoring-enquiries/new", regatta)).await?;
            let regatta_id = active_regatta(regatta, &session)?;
            let here = location("/scoring-enquiries/new", Some(regatta_id));
            let request = EnquiryRequest { race_number: race, requested_change: change, entry_id: entry };
            let enquiry = app.settle(enquiries::submit_enquiry(app.http(), regatta_id, &request).await, &here)?;
            print_json(&enquiry)
        }
    }
}

async fn run_news(app: &App, cmd: NewsCommand) -> Result<(), CliError> {
    match cmd.command {
        NewsSubcommand::List { regatta } => {
            let session = app.enter(RouteGuard::authenticated(), &location("/news", regatta)).await?;
            let regatta_id = active_regatta(regatta, &session)?;
            let here = location("/news", Some(regatta_id));
            let items = app.settle(news::list_news(app.http(), regatta_id).await, &here)?;
            print_json(&items)
        }
        NewsSubcommand::Publish { regatta, title, body } => {
            let session = app.enter(RouteGuard::admin_only(), &location("/admin/news", regatta)).await?;
            let regatta_id = active_regatta(regatta, &session)?;
            let here = location("/admin/news", Some(regatta_id));
            let draft = NewsDraft { title: Some(title), body };
            let item = app.settle(news::create_news(app.http(), regatta_id, &draft).await, &here)?;
            print_json(&item)
        }
    }
}

async fn run_results(app: &App, cmd: ResultsCommand) -> Result<(), CliError> {
    match cmd.command {
        ResultsSubcommand::List { regatta, race } => {
            let session = app.enter(RouteGuard::authenticated(), &location("/results", regatta)).await?;
            let regatta_id = active_regatta(regatta, &session)?;
            let here = location("/results", Some(regatta_id));
            let rows = app.settle(results::list_results(app.http(), regatta_id, race).await, &here)?;
            print_json(&rows)
        }
        ResultsSubcommand::Upload { regatta, race, file } => {
            let session = app.enter(RouteGuard::admin_only(), &location("/admin/results", regatta)).await?;
            let regatta_id = active_regatta(regatta, &session)?;
            let here = location("/admin/results", Some(regatta_id));
            let (file_name, bytes) = read_file(&file)?;
            let import = app.settle(
                results::upload_results(app.http(), regatta_id, race, &file_name, bytes).await,
                &here,
            )?;
            print_json(&import)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_carries_regatta_context() {
        assert_eq!(location("/protests", Some(7)), "/protests?regatta_id=7");
        assert_eq!(location("/protests", None), "/protests");
    }

    #[test]
    fn list_args_parse() {
        let cli = Cli::try_parse_from([
            "regatta", "protests", "list", "--scope", "against_me", "--search", "BRA", "--pages", "3",
        ])
        .unwrap();
        let Command::Protests(ProtestsCommand { command: ProtestsSubcommand::List(args) }) = cli.command else {
            panic!("expected protests list");
        };
        assert_eq!(args.pages, 3);
        let scope: ProtestScope = scope_or_default(args.scope.as_deref()).unwrap();
        assert_eq!(scope, ProtestScope::AgainstMe);
    }

    #[test]
    fn regatta_show_and_calendar_day_parse() {
        let cli = Cli::try_parse_from(["regatta", "regattas", "show", "7"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Regattas(RegattasCommand { command: RegattasSubcommand::Show { regatta_id: 7 } })
        ));

        let cli = Cli::try_parse_from(["regatta", "regattas", "calendar", "--month", "3", "--day", "14"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Regattas(RegattasCommand {
                command: RegattasSubcommand::Calendar { year: None, month: Some(3), day: Some(14) }
            })
        ));
    }

    #[test]
    fn unknown_scope_is_rejected() {
        assert!(matches!(scope_or_default::<NoticeScope>(Some("urgent")), Err(CliError::Scope(_))));
        assert_eq!(scope_or_default::<NoticeScope>(None).unwrap(), NoticeScope::All);
    }
}
