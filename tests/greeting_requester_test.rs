use anyhow::Result;
use hello_client::{
    Action, ActionOutcome, GreetingMethod, GreetingRequester, HttpGateway, MemoryPage,
};
use httpmock::prelude::*;

const INVALID: &str = "Nombre inválido. Solo letras, números y espacios.";

fn requester(server: &MockServer, method: GreetingMethod) -> Result<GreetingRequester> {
    let gateway = HttpGateway::new(&server.base_url(), false)?;
    Ok(GreetingRequester::new(method, gateway))
}

/// GET：名稱以 query string 傳送，回應的 message 寫入 getrespmsg
#[tokio::test]
async fn test_get_greeting_renders_message() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/app/hello")
            .query_param("name", "John 2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "hi"}));
    });

    let page = MemoryPage::new().with_input("name", "John 2");
    let outcome = requester(&server, GreetingMethod::Get)?.run(&page).await?;

    api_mock.assert();
    assert_eq!(
        outcome,
        ActionOutcome::Rendered {
            output: "getrespmsg".to_string(),
            content: "hi".to_string(),
        }
    );
    assert_eq!(page.output("getrespmsg").as_deref(), Some("hi"));
    Ok(())
}

/// POST：JSON 本體 {"name": ...} 與 Content-Type 標頭
#[tokio::test]
async fn test_post_greeting_sends_json_body() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/app/hello")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({"name": "Ana"}));
        then.status(200)
            .json_body(serde_json::json!({"message": "hello Ana"}));
    });

    let page = MemoryPage::new().with_input("postname", "Ana");
    let outcome = requester(&server, GreetingMethod::Post)?.run(&page).await?;

    api_mock.assert();
    assert!(outcome.request_sent());
    assert_eq!(page.output("postrespmsg").as_deref(), Some("hello Ana"));
    assert!(page.output("getrespmsg").is_none());
    Ok(())
}

/// 驗證失敗時不送出任何請求，兩種方法都一樣
#[tokio::test]
async fn test_invalid_name_suppresses_request() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.path("/app/hello");
        then.status(200)
            .json_body(serde_json::json!({"message": "should not be shown"}));
    });

    let page = MemoryPage::new()
        .with_input("name", "../etc")
        .with_input("postname", "../etc");

    let get = requester(&server, GreetingMethod::Get)?.run(&page).await?;
    let post = requester(&server, GreetingMethod::Post)?.run(&page).await?;

    api_mock.assert_hits(0);
    assert!(!get.request_sent());
    assert!(!post.request_sent());
    assert_eq!(page.output("getrespmsg").as_deref(), Some(INVALID));
    assert_eq!(page.output("postrespmsg").as_deref(), Some(INVALID));
    Ok(())
}

#[tokio::test]
async fn test_rejected_characters() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.path("/app/hello");
        then.status(200).json_body(serde_json::json!({"message": "x"}));
    });
    let get = requester(&server, GreetingMethod::Get)?;

    for name in ["a!b", "name_test", "😀", ""] {
        let page = MemoryPage::new().with_input("name", name);
        let outcome = get.run(&page).await?;
        assert!(!outcome.request_sent(), "{:?} should be rejected", name);
        assert_eq!(page.output("getrespmsg").as_deref(), Some(INVALID));
    }

    api_mock.assert_hits(0);
    Ok(())
}

/// 非 JSON 回應：回傳錯誤，輸出元素保持不變
#[tokio::test]
async fn test_malformed_json_leaves_output_unchanged() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/app/hello");
        then.status(200).body("<html>oops</html>");
    });

    let page = MemoryPage::new().with_input("name", "Ana");
    let result = requester(&server, GreetingMethod::Get)?.run(&page).await;

    assert!(matches!(
        result,
        Err(hello_client::ClientError::Serialization(_))
    ));
    assert!(page.output("getrespmsg").is_none());
    Ok(())
}
