//! Interactive shell around the console core. Presentation only: every
//! state change goes through the `Console` API.

use std::io::{self, BufRead, Write as _};
use std::path::Path;

use copydesk::clients::BackendClient;
use copydesk::console::Console;
use copydesk::core::config::AppConfig;
use copydesk::core::models::{ActiveView, FileUpload, Platform, Style};

const HELP: &str = "\
commands:
  topic <text>        set the write topic
  platform <name>     facebook | instagram | threads
  style <name>        專業且親切 | 幽默風趣 | 感性動人 | 簡潔有力
  agent on|off        toggle multi-agent mode
  search on|off       toggle web-search mode
  generate            submit the write workflow
  image <path>        pick an image for vision analysis
  analyze             submit the vision workflow
  idea <text>         set the brainstorm idea
  discuss             submit the brainstorm workflow
  use analysis        seed the topic from the vision result
  use brainstorm      seed the topic from the brainstorm result
  view <name>         write | vision | brainstorm
  brand <path>        pick a brand document
  upload              upload the brand document
  show                print the active view's state
  quit";

fn parse_platform(s: &str) -> Option<Platform> {
    match s {
        "facebook" => Some(Platform::Facebook),
        "instagram" => Some(Platform::Instagram),
        "threads" => Some(Platform::Threads),
        _ => None,
    }
}

fn parse_style(s: &str) -> Option<Style> {
    Style::PRESETS.iter().copied().find(|p| p.as_str() == s)
}

fn parse_view(s: &str) -> Option<ActiveView> {
    match s {
        "write" => Some(ActiveView::Write),
        "vision" => Some(ActiveView::Vision),
        "brainstorm" => Some(ActiveView::Brainstorm),
        _ => None,
    }
}

fn load_file(path: &str) -> Option<FileUpload> {
    let name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())?;
    match std::fs::read(path) {
        Ok(bytes) => Some(FileUpload::new(name, bytes)),
        Err(e) => {
            eprintln!("cannot read {path}: {e}");
            None
        }
    }
}

fn show(console: &Console) {
    match console.active_view {
        ActiveView::Write => {
            let slice = &console.write;
            println!("topic: {}", slice.input.topic);
            println!(
                "platform: {}  style: {}  agent: {}  search: {}",
                slice.input.platform.as_str(),
                slice.input.style.as_str(),
                slice.input.use_agent,
                slice.input.use_search
            );
            if slice.busy {
                println!("(生成中...)");
            }
            if let Some(result) = &slice.result {
                for log in &result.logs {
                    println!("› {log}");
                }
                println!("{}", result.content);
            }
            if let Some(error) = &slice.last_error {
                println!("{error}");
            }
        }
        ActiveView::Vision => {
            let slice = &console.vision;
            match &slice.input.image {
                Some(image) => println!("image: {}", image.file_name),
                None => println!("image: (未選擇)"),
            }
            if slice.busy {
                println!("(分析中...)");
            }
            if let Some(result) = &slice.result {
                println!("{}", result.analysis);
            }
            if let Some(error) = &slice.last_error {
                println!("{error}");
            }
        }
        ActiveView::Brainstorm => {
            let slice = &console.brainstorm;
            println!("idea: {}", slice.input.idea);
            if slice.busy {
                println!("(討論中...)");
            }
            if let Some(result) = &slice.result {
                println!("{}", result.suggestions);
            }
            if let Some(error) = &slice.last_error {
                println!("{error}");
            }
        }
    }
}

#[tokio::main]
async fn main() {
    copydesk::setup_logging();

    let config = AppConfig::from_env();
    let gateway = BackendClient::new(&config);
    let mut console = Console::new();

    println!(
        "copydesk - AI 社群文案主控台 (backend: {})",
        config.backend_base_url
    );
    println!("type 'help' for commands");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));

        match (cmd, rest) {
            ("quit" | "exit", _) => break,
            ("help", _) => println!("{HELP}"),
            ("topic", text) => console.write.input.topic = text.to_string(),
            ("platform", name) => match parse_platform(name) {
                Some(p) => console.write.input.platform = p,
                None => println!("unknown platform: {name}"),
            },
            ("style", name) => match parse_style(name) {
                Some(s) => console.write.input.style = s,
                None => println!("unknown style: {name}"),
            },
            ("agent", flag) => console.write.input.use_agent = flag == "on",
            ("search", flag) => console.write.input.use_search = flag == "on",
            ("generate", _) => {
                console.submit_write(&gateway).await;
                show(&console);
            }
            ("image", path) => console.vision.input.image = load_file(path),
            ("analyze", _) => {
                console.submit_vision(&gateway).await;
                console.set_active_view(ActiveView::Vision);
                show(&console);
            }
            ("idea", text) => console.brainstorm.input.idea = text.to_string(),
            ("discuss", _) => {
                console.submit_brainstorm(&gateway).await;
                console.set_active_view(ActiveView::Brainstorm);
                show(&console);
            }
            ("use", "analysis") => {
                console.promote_vision_to_write();
                show(&console);
            }
            ("use", "brainstorm") => {
                console.promote_brainstorm_to_write();
                show(&console);
            }
            ("view", name) => match parse_view(name) {
                Some(v) => {
                    console.set_active_view(v);
                    show(&console);
                }
                None => println!("unknown view: {name}"),
            },
            ("brand", path) => console.brand.input.document = load_file(path),
            ("upload", _) => {
                console.submit_brand_upload(&gateway).await;
                if let Some(receipt) = &console.brand.result {
                    println!("{}", receipt.message);
                } else if let Some(error) = &console.brand.last_error {
                    println!("{error}");
                }
            }
            ("show", _) => show(&console),
            ("", _) => {}
            (other, _) => println!("unknown command: {other} (try 'help')"),
        }
    }
}
