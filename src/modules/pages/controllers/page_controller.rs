use actix_web::{http::header::ContentType, web, HttpResponse};
use serde::Deserialize;

/// Seconds the success page counts down before redirecting
const REDIRECT_DELAY_SECS: u32 = 5;

/// Settings for the post-checkout landing pages
#[derive(Debug, Clone)]
pub struct PageSettings {
    /// Destination of the success page's timed redirect
    pub return_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SuccessQuery {
    pub pedido_id: Option<i64>,
}

/// Payment approved landing page
/// GET /pagamento_sucesso?pedido_id=...
///
/// Shows a countdown and redirects the payer to the configured return URL.
pub async fn payment_success(
    settings: web::Data<PageSettings>,
    query: web::Query<SuccessQuery>,
) -> HttpResponse {
    let order_line = match query.pedido_id {
        Some(id) => format!("<p>Pedido <strong>#{}</strong> confirmado.</p>", id),
        None => String::new(),
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8">
  <title>Pagamento aprovado</title>
</head>
<body>
  <h1>Pagamento aprovado!</h1>
  {order_line}
  <p>Você será redirecionado em <span id="countdown">{delay}</span> segundos...</p>
  <script>
    var remaining = {delay};
    var timer = setInterval(function () {{
      remaining -= 1;
      document.getElementById("countdown").textContent = remaining;
      if (remaining <= 0) {{
        clearInterval(timer);
        window.location.href = "{return_url}";
      }}
    }}, 1000);
  </script>
</body>
</html>"#,
        order_line = order_line,
        delay = REDIRECT_DELAY_SECS,
        return_url = settings.return_url,
    );

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html)
}

/// Payment failed landing page
/// GET /pagamento_falha
pub async fn payment_failure() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>Pagamento recusado</title></head>
<body>
  <h1>Pagamento recusado</h1>
  <p>Não foi possível concluir o pagamento. Tente novamente.</p>
</body>
</html>"#,
    )
}

/// Payment pending landing page
/// GET /pagamento_pendente
pub async fn payment_pending() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>Pagamento pendente</title></head>
<body>
  <h1>Pagamento pendente</h1>
  <p>Seu pagamento está em análise. Você receberá a confirmação em breve.</p>
</body>
</html>"#,
    )
}

/// Configure landing page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/pagamento_sucesso", web::get().to(payment_success))
        .route("/pagamento_falha", web::get().to(payment_failure))
        .route("/pagamento_pendente", web::get().to(payment_pending));
}
