use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use validator::Validate;

use linguarium_client::config::{AuthProvider, OAuthProvider};
use linguarium_client::core::AppContext;
use linguarium_client::domain::dto::users::{LoginRequest, RegisterRequest};
use linguarium_client::errors::{ClientError, ClientResult};
use linguarium_client::transport::SessionStore;
use linguarium_client::utils::display_terminal::{print_boxed_title, print_entry, print_profile};

#[derive(Debug, Parser)]
#[command(name = "linguarium_client", version, about = "Linguarium 백엔드 CLI 클라이언트")]
struct Cli {
    /// 인증이 필요한 요청에 사용할 액세스 토큰
    #[arg(long, global = true, env = "LINGUARIUM_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 설정된 엔드포인트 URL 목록 출력
    Endpoints,

    /// 소셜 로그인 리디렉션 URL 출력 (google, facebook, github, linkedin)
    OauthUrl { provider: OAuthProvider },

    /// 이메일/패스워드 로그인
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// 로컬 계정 회원가입
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// 현재 사용자 프로필 조회
    Me,

    /// ID로 사용자 프로필 조회
    User { id: i64 },

    /// 현재 계정 삭제 (되돌릴 수 없음)
    DeleteAccount {
        /// 삭제 확인
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    load_env_file();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let session = match cli.token {
        Some(token) => SessionStore::with_token(token),
        None => SessionStore::new(),
    };
    let context = AppContext::from_env(session)?;

    match cli.command {
        Command::Endpoints => {
            print_boxed_title("ENDPOINTS");
            for (name, url) in context.config().entries() {
                print_entry(name, url);
            }
        }
        Command::OauthUrl { provider } => {
            info!("🔗 {} 소셜 로그인 URL", AuthProvider::from(provider).as_str());
            println!("{}", context.config().oauth_url(provider));
        }
        Command::Login { email, password } => {
            let credentials = LoginRequest::new(email, password);
            credentials.validate()?;

            let response = context.auth_service().login(&credentials).await?;
            println!("{}", response.access_token);
            if let Some(user) = &response.user_info {
                print_profile("LOGGED IN", user);
            }
        }
        Command::Register { username, email, password } => {
            let request = RegisterRequest::new(username, email, password);
            request.validate()?;

            let message = context.auth_service().register(&request).await?;
            info!("✅ 회원가입 결과: success={} {}", message.success, message.message);
        }
        Command::Me => {
            let profile = context.user_service().get_current_user().await?;
            print_profile("ME", &profile);
        }
        Command::User { id } => {
            let profile = context.user_service().get_account_by_id(id).await?;
            print_profile("USER", &profile);
        }
        Command::DeleteAccount { yes } => {
            if !yes {
                return Err(ClientError::Validation(
                    "계정 삭제는 되돌릴 수 없습니다. --yes 로 확인해주세요".to_string(),
                ));
            }

            let body = context.user_service().delete_account().await?;
            println!("{}", body);
        }
    }

    Ok(())
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        // .env.dev 가 없으면 기본 엔드포인트로 동작
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => warn!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
