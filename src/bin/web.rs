use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use clap::Parser;
use medmatch::utils::{logger, validation::Validate};
use medmatch::{
    analyze, parse_symptom_input, DoctorDirectory, LocationFilter, Recommendation, WebConfig,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "medmatch-web")]
#[command(about = "Web form front end for the symptom-to-specialist lookup")]
struct WebArgs {
    #[arg(long, default_value = "./medmatch-web.toml")]
    config: String,
}

struct AppState {
    directory: DoctorDirectory,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = WebArgs::parse();

    logger::init_web_logger();
    tracing::info!("Starting medmatch web server");

    let config = WebConfig::from_toml_file(&args.config)?;
    config.validate()?;

    let directory = medmatch::domain::directory::load_directory(&config)?;
    let state = Arc::new(AppState { directory });

    let app = Router::new()
        .route("/", get(serve_form))
        .route("/analyze", post(handle_analyze))
        .route("/health", get(|| async { "ok" }))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    tracing::info!(addr = %config.server.bind, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Debug, Deserialize)]
struct AnalyzeForm {
    #[serde(default)]
    symptoms: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    state: String,
}

async fn serve_form() -> Html<&'static str> {
    Html(FORM_PAGE_HTML)
}

async fn handle_analyze(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AnalyzeForm>,
) -> Html<String> {
    let symptoms = parse_symptom_input(&form.symptoms);
    if symptoms.is_empty() {
        return Html(page(
            "<p class=\"warn\">Please enter at least one symptom.</p>".to_string(),
        ));
    }

    let location = LocationFilter::new(Some(form.city), Some(form.state));
    let report = analyze(&state.directory, &symptoms, &location);

    let mut body = String::from("<h2>Analysis Results</h2>");
    for recommendation in &report.recommendations {
        body.push_str(&render_html_block(recommendation));
    }
    Html(page(body))
}

fn render_html_block(recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::Doctor {
            condition,
            speciality,
            doctor,
        } => format!(
            "<div class=\"result\">\
             <h3>Possible Condition: {}</h3>\
             <p>Recommended {}:</p>\
             <ul>\
             <li><b>Doctor:</b> {}</li>\
             <li><b>Clinic:</b> {}</li>\
             <li><b>Address:</b> {}, {}, {}</li>\
             </ul></div>",
            escape(condition),
            escape(speciality),
            escape(&doctor.doctor_name),
            escape(&doctor.clinic_name),
            escape(&doctor.clinic_address),
            escape(&doctor.clinic_city),
            escape(&doctor.clinic_state),
        ),
        Recommendation::NoSpecialist { condition } => format!(
            "<div class=\"result\"><h3>{}</h3>\
             <p>No specialist found for this condition. \
             Please consult a General Physician.</p></div>",
            escape(condition)
        ),
        Recommendation::NoneInArea {
            condition,
            speciality,
        } => format!(
            "<div class=\"result\"><h3>Possible Condition: {}</h3>\
             <p>No {} found in this location. \
             Try removing the city/state filters.</p></div>",
            escape(condition),
            escape(speciality)
        ),
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page(body: String) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Medical Assistant</title>\
         <style>body{{font-family:sans-serif;max-width:640px;margin:2em auto}}\
         .result{{border:1px solid #ccc;padding:1em;margin:1em 0}}\
         .warn{{color:#a60}}</style></head><body>\
         <h1>Medical Assistant</h1>{body}\
         <p><a href=\"/\">New search</a></p></body></html>"
    )
}

static FORM_PAGE_HTML: &str = "<!DOCTYPE html><html><head><title>Medical Assistant</title>\
<style>body{font-family:sans-serif;max-width:640px;margin:2em auto}\
label{display:block;margin-top:1em}input{width:100%;padding:0.4em}\
button{margin-top:1em;padding:0.5em 1.5em}</style></head><body>\
<h1>Medical Assistant</h1>\
<p>Enter your symptoms below to get possible conditions and recommended doctors.</p>\
<form method=\"post\" action=\"/analyze\">\
<label>Symptoms (comma-separated)\
<input name=\"symptoms\" placeholder=\"e.g. cough, fever, headache\"></label>\
<label>City (optional)<input name=\"city\"></label>\
<label>State (optional)<input name=\"state\"></label>\
<button type=\"submit\">Analyze</button>\
</form></body></html>";
