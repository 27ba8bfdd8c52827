use linkedin::model::{
    AuthorId, Id, IdError, JobPosting, JobPostingBatch, JobPostingOperationType, LifecycleState,
    OAuthError, OrganizationId, PersonId, Profile, Token, UgcPost,
};
use linkedin::scopes;

#[test]
fn test_profile_deserialization() {
    let profile: Profile = serde_json::from_str(
        r#"{
            "id": "yrZCpj2Z12",
            "localizedFirstName": "Bob",
            "localizedLastName": "Smith",
            "vanityName": "ignored-by-the-decoder"
        }"#,
    )
    .unwrap();

    assert_eq!(
        profile,
        Profile {
            id: "yrZCpj2Z12".to_owned(),
            first_name: "Bob".to_owned(),
            last_name: "Smith".to_owned(),
        }
    );
}

#[test]
fn test_profile_deserialization_is_lenient() {
    let profile: Profile = serde_json::from_str(r#"{"id": "yrZCpj2Z12"}"#).unwrap();

    assert_eq!(profile.id, "yrZCpj2Z12");
    assert_eq!(profile.first_name, "");
    assert_eq!(profile.last_name, "");
}

#[test]
fn test_ugc_post_serialization() {
    let author = AuthorId::from(PersonId::from_id("42").unwrap());
    let post = UgcPost::text(&author, "hello");
    let value = serde_json::to_value(&post).unwrap();

    assert_eq!(value["author"], "urn:li:person:42");
    assert_eq!(value["lifecycleState"], "PUBLISHED");

    let content = &value["specificContent"]["com.linkedin.ugc.ShareContent"];
    assert_eq!(content["shareCommentary"]["text"], "hello");
    assert_eq!(content["shareMediaCategory"], "NONE");
    // No media attached, no media key.
    assert!(content.get("media").is_none());

    assert_eq!(
        value["visibility"]["com.linkedin.ugc.MemberNetworkVisibility"],
        "PUBLIC"
    );
}

#[test]
fn test_ugc_post_with_organization_author() {
    let author = AuthorId::from(OrganizationId::from_id("2414183").unwrap());
    let post = UgcPost::text(&author, "company news");

    assert_eq!(post.author, "urn:li:organization:2414183");
}

#[test]
fn test_lifecycle_state_as_static_str() {
    assert_eq!(<&'static str>::from(LifecycleState::Published), "PUBLISHED");
}

#[test]
fn test_id_parsing() {
    let id = PersonId::from_urn("urn:li:person:abc123").unwrap();
    assert_eq!(id.id(), "abc123");
    assert_eq!(id.urn(), "urn:li:person:abc123");

    assert_eq!(
        PersonId::from_urn("li:person:abc123"),
        Err(IdError::InvalidPrefix)
    );
    assert_eq!(PersonId::from_urn("urn:li:person"), Err(IdError::InvalidFormat));
    assert_eq!(
        PersonId::from_urn("urn:li:organization:abc123"),
        Err(IdError::InvalidType)
    );
    assert_eq!(PersonId::from_id(""), Err(IdError::InvalidId));
    assert_eq!(PersonId::from_id("with spaces"), Err(IdError::InvalidId));

    let org = OrganizationId::from_urn("urn:li:organization:2414183").unwrap();
    assert_eq!(org.urn(), "urn:li:organization:2414183");
}

#[test]
fn test_token_deserialization() {
    let token: Token = serde_json::from_str(
        r#"{"access_token":"abc123","expires_in":5184000,"scope":"r_liteprofile,r_emailaddress"}"#,
    )
    .unwrap();

    assert_eq!(token.access_token, "abc123");
    assert_eq!(token.expires_in.num_seconds(), 5_184_000);
    assert_eq!(token.expires_at, None);
    assert_eq!(token.refresh_token, None);
    assert_eq!(token.scopes, scopes!("r_liteprofile", "r_emailaddress"));

    // The OAuth2 spec separates scopes with spaces; accepted as well.
    let token: Token = serde_json::from_str(
        r#"{"access_token":"abc123","expires_in":60,"scope":"openid profile"}"#,
    )
    .unwrap();
    assert_eq!(token.scopes, scopes!("openid", "profile"));

    // A minimal response still decodes.
    let token: Token = serde_json::from_str(r#"{"access_token":"abc123"}"#).unwrap();
    assert_eq!(token.access_token, "abc123");
    assert_eq!(token.expires_in.num_seconds(), 0);
    assert!(token.scopes.is_empty());
}

#[test]
fn test_oauth_error_payload() {
    let err: OAuthError = serde_json::from_str(
        r#"{"error":"invalid_request","error_description":"A required parameter is missing"}"#,
    )
    .unwrap();

    assert_eq!(err.error, "invalid_request");
    assert_eq!(
        err.to_string(),
        "invalid_request: A required parameter is missing"
    );

    // A token response must not decode as an error payload.
    assert!(serde_json::from_str::<OAuthError>(r#"{"access_token":"abc123"}"#).is_err());
}

#[test]
fn test_job_posting_batch_serialization() {
    let posting = JobPosting {
        integration_context: "urn:li:organization:2414183".to_owned(),
        company_apply_url: "https://careers.example.com/42".to_owned(),
        description: "We are looking for a systems engineer".to_owned(),
        employment_status: "urn:li:employmentStatus:FULL_TIME".to_owned(),
        external_job_posting_id: "42".to_owned(),
        listed_at: 1_685_030_400_000,
        job_posting_operation_type: JobPostingOperationType::Create,
        title: "Systems Engineer".to_owned(),
        location: "Berlin, Germany".to_owned(),
        workplace_types: vec!["remote".to_owned()],
    };
    let value = serde_json::to_value(JobPostingBatch {
        elements: vec![posting],
    })
    .unwrap();

    let element = &value["elements"][0];
    assert_eq!(element["integrationContext"], "urn:li:organization:2414183");
    assert_eq!(element["companyApplyUrl"], "https://careers.example.com/42");
    assert_eq!(
        element["employmentStatus"],
        "urn:li:employmentStatus:FULL_TIME"
    );
    assert_eq!(element["externalJobPostingId"], "42");
    assert_eq!(element["listedAt"], 1_685_030_400_000_i64);
    assert_eq!(element["jobPostingOperationType"], "CREATE");
    assert_eq!(element["workplaceTypes"][0], "remote");
}
