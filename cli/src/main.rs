use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand, ValueEnum};
use ledger::endpoints;
use ledger::error::parse_body;
use ledger::filter::apply_query;
use ledger::records::{PaymentsOverview, action_message, envelope_data, envelope_rows, for_collector};
use ledger::review::{Decision, WithdrawalDesk, submit_review};
use ledger::session::LoginResponse;
use ledger::validate::{validate_feedback, validate_login, validate_withdrawal_request};
use ledger::{ApiError, Feedback, FeedbackCategory, ListQuery, Role, Session, StatusFilter, StatusKey, TxStatus, Withdrawal};
use serde::Serialize;
use serde_json::Value;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing token; pass --token or set PORTAL_TOKEN")]
    MissingToken,
    #[error("missing collector id; pass --collector-id or set PORTAL_COLLECTOR_ID")]
    MissingCollectorId,
    #[error("withdrawal {0} not found in your queue")]
    UnknownWithdrawal(String),
    #[error("aborted")]
    Aborted,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("stdin/stdout failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "portal-cli", about = "Savings portal API CLI")]
struct Cli {
    #[arg(long, env = "PORTAL_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Bearer token from `login`.
    #[arg(long, env = "PORTAL_TOKEN")]
    token: Option<String>,

    /// Scopes `withdrawals` commands to one collector.
    #[arg(long, env = "PORTAL_COLLECTOR_ID")]
    collector_id: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the portal server's health endpoint.
    Ping,
    /// Sign in and print the session token.
    Login(LoginArgs),
    Feedback(FeedbackCommand),
    Payments(PaymentsCommand),
    /// File a customer withdrawal request.
    Withdraw(WithdrawArgs),
    Withdrawals(WithdrawalsCommand),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RoleArg {
    Customer,
    Collector,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Customer => Self::Customer,
            RoleArg::Collector => Self::Collector,
        }
    }
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long, value_enum)]
    role: RoleArg,
    #[arg(long)]
    email: String,
    #[arg(long, env = "PORTAL_PASSWORD")]
    password: String,
}

/// Search + status filter shared by every list command.
#[derive(Args, Debug, Clone)]
struct FilterArgs {
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, default_value = "all")]
    status: String,
}

impl FilterArgs {
    fn query<S: StatusKey>(&self) -> ListQuery<S> {
        ListQuery { search: self.search.clone(), status: StatusFilter::from_key(&self.status) }
    }
}

#[derive(Args, Debug)]
struct FeedbackCommand {
    #[command(subcommand)]
    command: FeedbackSubcommand,
}

#[derive(Subcommand, Debug)]
enum FeedbackSubcommand {
    List(FilterArgs),
    Submit {
        #[arg(long)]
        message: String,
        #[arg(long, default_value_t = 5)]
        rating: u8,
        /// general, technical, payment, customer or suggestion
        #[arg(long)]
        category: String,
    },
}

#[derive(Args, Debug)]
struct PaymentsCommand {
    #[command(subcommand)]
    command: PaymentsSubcommand,
}

#[derive(Subcommand, Debug)]
enum PaymentsSubcommand {
    Show {
        #[arg(long)]
        customer_id: String,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Args, Debug)]
struct WithdrawArgs {
    #[arg(long)]
    amount: String,
    #[arg(long)]
    reason: String,
    #[arg(long)]
    account_id: String,
}

#[derive(Args, Debug)]
struct WithdrawalsCommand {
    #[command(subcommand)]
    command: WithdrawalsSubcommand,
}

#[derive(Subcommand, Debug)]
enum WithdrawalsSubcommand {
    List(FilterArgs),
    Approve {
        withdrawal_id: String,
        /// Skip the confirmation prompt.
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
    Reject {
        withdrawal_id: String,
        #[arg(long)]
        reason: String,
    },
}

/// Authenticated API client. Also the CLI's [`WithdrawalDesk`].
#[derive(Debug, Clone)]
struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    fn new(base_url: &str, token: Option<String>) -> Result<Self, CliError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { base_url: base_url.trim_end_matches('/').to_owned(), token, http })
    }

    fn require_token(&self) -> Result<(), CliError> {
        if self.token.is_some() { Ok(()) } else { Err(CliError::MissingToken) }
    }

    async fn request<B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, ApiError> {
        let url = endpoints::join(&self.base_url, path);
        let mut request = self.http.request(method, &url);
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, endpoints::bearer(token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_body(status, &text)
    }

    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request::<Value>(reqwest::Method::GET, path, None).await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.request(reqwest::Method::POST, path, Some(body)).await
    }
}

impl WithdrawalDesk for ApiClient {
    async fn list_withdrawals(&self) -> Result<Vec<Withdrawal>, ApiError> {
        let body = self.get(endpoints::COLLECTOR_WITHDRAWALS).await?;
        Ok(Withdrawal::list_from_value(body.get("data").unwrap_or(&body)))
    }

    async fn approve_withdrawal(&self, withdrawal_id: &str) -> Result<Option<String>, ApiError> {
        let body = self
            .post(&endpoints::approve_withdrawal(withdrawal_id), &serde_json::json!({}))
            .await?;
        Ok(action_message(&body))
    }

    async fn reject_withdrawal(&self, withdrawal_id: &str, reason: &str) -> Result<Option<String>, ApiError> {
        let body = self
            .post(&endpoints::reject_withdrawal(withdrawal_id), &serde_json::json!({ "reason": reason }))
            .await?;
        Ok(action_message(&body))
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.base_url, cli.token)?;

    match cli.command {
        Command::Ping => run_ping(&client).await,
        Command::Login(args) => run_login(&client, args).await,
        Command::Feedback(feedback) => run_feedback(&client, feedback).await,
        Command::Payments(payments) => run_payments(&client, payments).await,
        Command::Withdraw(args) => run_withdraw(&client, args).await,
        Command::Withdrawals(withdrawals) => {
            let collector_id = cli.collector_id.ok_or(CliError::MissingCollectorId)?;
            run_withdrawals(&client, &collector_id, withdrawals).await
        }
    }
}

async fn run_ping(client: &ApiClient) -> Result<(), CliError> {
    let url = endpoints::join(&client.base_url, "/healthz");
    let response = client.http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Server { status: status.as_u16(), message: "health check failed".to_owned() }.into());
    }
    println!("ok");
    Ok(())
}

async fn run_login(client: &ApiClient, args: LoginArgs) -> Result<(), CliError> {
    let role = Role::from(args.role);
    let credentials = validate_login(&args.email, &args.password)?;
    let body = client
        .post(&role.login_endpoint(), &credentials)
        .await
        .map_err(|err| match err {
            ApiError::Unauthorized(message) => ApiError::Validation(message),
            other => other,
        })?;
    let response: LoginResponse = serde_json::from_value(body)?;
    let session = Session::from_login(role, response, now_ms())?;
    print_json(&login_summary(&session))?;
    eprintln!("export PORTAL_TOKEN={}", session.token);
    if role == Role::Collector {
        eprintln!("export PORTAL_COLLECTOR_ID={}", session.user.id);
    }
    Ok(())
}

async fn run_feedback(client: &ApiClient, feedback: FeedbackCommand) -> Result<(), CliError> {
    client.require_token()?;
    match feedback.command {
        FeedbackSubcommand::List(filter) => {
            let items: Vec<Feedback> = envelope_rows(client.get(endpoints::MY_FEEDBACK).await?)?;
            let visible = apply_query(&items, &filter.query());
            print_json(&serde_json::to_value(visible)?)
        }
        FeedbackSubcommand::Submit { message, rating, category } => {
            let draft = validate_feedback(&message, rating, FeedbackCategory::from_key(&category))?;
            let body = client.post(endpoints::SUBMIT_FEEDBACK, &draft).await?;
            println!("{}", action_message(&body).unwrap_or_else(|| "Feedback sent.".to_owned()));
            Ok(())
        }
    }
}

async fn run_payments(client: &ApiClient, payments: PaymentsCommand) -> Result<(), CliError> {
    client.require_token()?;
    match payments.command {
        PaymentsSubcommand::Show { customer_id, filter } => {
            let overview: PaymentsOverview = envelope_data(client.get(&endpoints::user_payments(&customer_id)).await?)?;
            let transactions = apply_query(&overview.all_transactions, &filter.query());
            print_json(&serde_json::json!({
                "summary": overview.summary,
                "transactions": transactions,
            }))
        }
    }
}

async fn run_withdraw(client: &ApiClient, args: WithdrawArgs) -> Result<(), CliError> {
    client.require_token()?;
    let request = validate_withdrawal_request(&args.amount, &args.reason, Some(&args.account_id))?;
    let body = client.post(endpoints::REQUEST_WITHDRAWAL, &request).await?;
    println!(
        "{}",
        action_message(&body).unwrap_or_else(|| "Withdrawal request submitted for approval.".to_owned())
    );
    Ok(())
}

async fn run_withdrawals(
    client: &ApiClient,
    collector_id: &str,
    withdrawals: WithdrawalsCommand,
) -> Result<(), CliError> {
    client.require_token()?;
    match withdrawals.command {
        WithdrawalsSubcommand::List(filter) => {
            let items = for_collector(client.list_withdrawals().await?, collector_id);
            let visible = apply_query(&items, &filter.query());
            print_json(&serde_json::to_value(visible)?)
        }
        WithdrawalsSubcommand::Approve { withdrawal_id, yes } => {
            let withdrawal = owned_withdrawal(client, collector_id, &withdrawal_id).await?;
            if !yes && !prompt_yes_no(&Decision::Approve.confirm_prompt(&withdrawal))? {
                return Err(CliError::Aborted);
            }
            review(client, collector_id, &withdrawal_id, &Decision::Approve).await
        }
        WithdrawalsSubcommand::Reject { withdrawal_id, reason } => {
            owned_withdrawal(client, collector_id, &withdrawal_id).await?;
            review(client, collector_id, &withdrawal_id, &Decision::Reject { reason }).await
        }
    }
}

/// Look `withdrawal_id` up in the collector's own queue before acting on it.
async fn owned_withdrawal(client: &ApiClient, collector_id: &str, withdrawal_id: &str) -> Result<Withdrawal, CliError> {
    for_collector(client.list_withdrawals().await?, collector_id)
        .into_iter()
        .find(|w| w.id == withdrawal_id)
        .ok_or_else(|| CliError::UnknownWithdrawal(withdrawal_id.to_owned()))
}

async fn review(client: &ApiClient, collector_id: &str, withdrawal_id: &str, decision: &Decision) -> Result<(), CliError> {
    let receipt = submit_review(client, withdrawal_id, decision).await?;
    println!("{}", receipt.message);
    match receipt.refreshed {
        Ok(items) => eprintln!("{}", queue_line(&for_collector(items, collector_id))),
        Err(err) => eprintln!("refresh failed: {}", err.user_message()),
    }
    Ok(())
}

fn queue_line(items: &[Withdrawal]) -> String {
    let pending = items.iter().filter(|w| w.status == TxStatus::Pending).count();
    format!("{pending} pending of {} in your queue", items.len())
}

fn login_summary(session: &Session) -> Value {
    serde_json::json!({
        "role": session.role,
        "token": session.token,
        "user": session.user,
        "expiresAt": session.expires_at,
    })
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn prompt_yes_no(question: &str) -> Result<bool, CliError> {
    let mut stdout = io::stdout();
    write!(stdout, "{question} [y/N] ")?;
    stdout.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
