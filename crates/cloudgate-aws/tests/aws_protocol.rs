//! Adapter tests against a stubbed AWS endpoint.
//!
//! These drive the real SDK clients at a wiremock server via the
//! `endpoint_url` override, so the request shape (target header, JSON
//! body) and response decoding are exercised end to end.

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use base64::prelude::*;
use cloudgate_aws::{
    CloudError, CloudSession, EcrRegistryAuth, ParameterStore, RegistryAuth, SsmParameterStore,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn stub_session(server: &MockServer) -> CloudSession {
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::for_tests())
        .endpoint_url(server.uri())
        .load()
        .await;
    CloudSession::from_config(config)
}

#[tokio::test]
async fn ssm_get_decodes_parameter_value() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("x-amz-target", "AmazonSSM.GetParameter"))
        .and(body_partial_json(json!({
            "Name": "/app/secret",
            "WithDecryption": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Parameter": {
                "Name": "/app/secret",
                "Type": "SecureString",
                "Value": "s3cr3t",
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = SsmParameterStore::new(&stub_session(&server).await);
    let value = params.get("/app/secret").await.unwrap();
    assert_eq!(value, "s3cr3t");
}

#[tokio::test]
async fn ssm_put_sends_name_value_and_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("x-amz-target", "AmazonSSM.PutParameter"))
        .and(body_partial_json(json!({
            "Name": "/app/flag",
            "Value": "on",
            "Type": "String",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Version": 1,
            "Tier": "Standard",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = SsmParameterStore::new(&stub_session(&server).await);
    params.put("/app/flag", "on", "String").await.unwrap();
}

#[tokio::test]
async fn ssm_remote_failure_surfaces_as_remote_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({
                "__type": "ParameterNotFound",
            })),
        )
        .mount(&server)
        .await;

    let params = SsmParameterStore::new(&stub_session(&server).await);
    let err = params.get("/app/missing").await.unwrap_err();
    assert!(matches!(err, CloudError::Remote { service: "ssm", .. }));
}

#[tokio::test]
async fn ecr_returns_first_authorization_token() {
    let server = MockServer::start().await;
    let token = BASE64_STANDARD.encode("AWS:ecr-password");

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header(
            "x-amz-target",
            "AmazonEC2ContainerRegistry_V20150921.GetAuthorizationToken",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorizationData": [
                {
                    "authorizationToken": token,
                    "proxyEndpoint": "https://123456789012.dkr.ecr.us-east-1.amazonaws.com",
                },
                {
                    "authorizationToken": "aWdub3JlZDppZ25vcmVk",
                    "proxyEndpoint": "https://ignored.example.com",
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let registry = EcrRegistryAuth::new(&stub_session(&server).await);
    assert_eq!(registry.authorization_token().await.unwrap(), token);
}

#[tokio::test]
async fn ecr_empty_authorization_list_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorizationData": []
        })))
        .mount(&server)
        .await;

    let registry = EcrRegistryAuth::new(&stub_session(&server).await);
    let err = registry.authorization_token().await.unwrap_err();
    assert!(matches!(err, CloudError::NoAuthorizationData));
}
