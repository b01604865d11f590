/// Resolver tests for the director and movie schema.
///
/// Everything runs against the in-memory catalog; no Postgres is needed.
#[cfg(test)]
mod tests {
    use async_graphql::{Request, Value};
    use serde_json::json;

    use crate::graphql::create_schema;
    use crate::test_support::{anonymous, build_test_context, seed_user};

    fn error_code(error: &async_graphql::ServerError) -> Option<Value> {
        error
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .cloned()
    }

    // ─── Queries ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_all_directors_empty_returns_empty_list() {
        let ctx = build_test_context();
        let schema = create_schema(ctx.state);

        let response = schema.execute("{ allDirectors { id } }").await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(json["allDirectors"], json!([]));
    }

    #[tokio::test]
    async fn test_fullname_joins_first_and_last_name() {
        let ctx = build_test_context();
        let director = ctx.catalog.insert_director("Agnès", "Varda");
        let schema = create_schema(ctx.state);

        let query = format!(
            "{{ directorDetail(id: {}) {{ id firstName lastName fullname }} }}",
            director.id
        );
        let response = schema.execute(query).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        let detail = &json["directorDetail"];
        assert_eq!(detail["id"], director.id.to_string());
        assert_eq!(detail["firstName"], "Agnès");
        assert_eq!(detail["lastName"], "Varda");
        assert_eq!(detail["fullname"], "Agnès Varda");
    }

    #[tokio::test]
    async fn test_director_detail_without_id_is_null() {
        let ctx = build_test_context();
        ctx.catalog.insert_director("Agnès", "Varda");
        let schema = create_schema(ctx.state);

        let response = schema.execute("{ directorDetail { id } }").await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert!(json["directorDetail"].is_null());
    }

    #[tokio::test]
    async fn test_director_detail_missing_is_not_found() {
        let ctx = build_test_context();
        let schema = create_schema(ctx.state);

        let response = schema.execute("{ directorDetail(id: 404) { id } }").await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].message,
            "Director matching query does not exist."
        );
        assert_eq!(
            error_code(&response.errors[0]),
            Some(Value::from("NOT_FOUND"))
        );
    }

    #[tokio::test]
    async fn test_movie_detail_id_takes_precedence_over_title() {
        let ctx = build_test_context();
        ctx.catalog.insert_movie("X", Some(1990), None).unwrap();
        let target = ctx.catalog.insert_movie("Y", Some(1991), None).unwrap();
        let schema = create_schema(ctx.state);

        let query = format!(
            r#"{{ movieDetail(id: {}, title: "X") {{ id title }} }}"#,
            target.id
        );
        let response = schema.execute(query).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(json["movieDetail"]["id"], target.id.to_string());
        assert_eq!(json["movieDetail"]["title"], "Y");
    }

    #[tokio::test]
    async fn test_movie_detail_by_title() {
        let ctx = build_test_context();
        ctx.catalog.insert_movie("Stalker", Some(1979), None).unwrap();
        let schema = create_schema(ctx.state);

        let response = schema
            .execute(r#"{ movieDetail(title: "Stalker") { title year } }"#)
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(json["movieDetail"]["year"], 1979);
    }

    #[tokio::test]
    async fn test_movie_detail_without_arguments_is_null() {
        let ctx = build_test_context();
        ctx.catalog.insert_movie("Stalker", Some(1979), None).unwrap();
        let schema = create_schema(ctx.state);

        let response = schema.execute("{ movieDetail { id } }").await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert!(json["movieDetail"].is_null());
    }

    #[tokio::test]
    async fn test_movie_detail_missing_id_is_not_found() {
        let ctx = build_test_context();
        let schema = create_schema(ctx.state);

        let response = schema.execute("{ movieDetail(id: 999) { id } }").await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].message,
            "Movie matching query does not exist."
        );
        assert_eq!(
            error_code(&response.errors[0]),
            Some(Value::from("NOT_FOUND"))
        );
        let json = response.data.into_json().unwrap();
        assert!(json["movieDetail"].is_null());
    }

    #[tokio::test]
    async fn test_movie_director_and_movie_set_are_linked() {
        let ctx = build_test_context();
        let kubrick = ctx.catalog.insert_director("Stanley", "Kubrick");
        let shining = ctx
            .catalog
            .insert_movie("The Shining", Some(1980), Some(kubrick.id))
            .unwrap();
        ctx.catalog
            .insert_movie("Barry Lyndon", Some(1975), Some(kubrick.id))
            .unwrap();
        ctx.catalog.insert_movie("Unrelated", None, None).unwrap();
        let schema = create_schema(ctx.state);

        let query = format!(
            "{{ movieDetail(id: {}) {{ director {{ fullname movieSet {{ title }} }} }} }}",
            shining.id
        );
        let response = schema.execute(query).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        let director = &json["movieDetail"]["director"];
        assert_eq!(director["fullname"], "Stanley Kubrick");
        assert_eq!(
            director["movieSet"],
            json!([{ "title": "The Shining" }, { "title": "Barry Lyndon" }])
        );
    }

    #[tokio::test]
    async fn test_movie_without_director_has_null_director() {
        let ctx = build_test_context();
        let movie = ctx.catalog.insert_movie("Untitled", None, None).unwrap();
        let schema = create_schema(ctx.state);

        let query = format!(
            "{{ movieDetail(id: {}) {{ year director {{ id }} }} }}",
            movie.id
        );
        let response = schema.execute(query).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(json["movieDetail"]["year"], 2000);
        assert!(json["movieDetail"]["director"].is_null());
    }

    // ─── Mutations ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_director_then_detail() {
        let ctx = build_test_context();
        let catalog = ctx.catalog.clone();
        let schema = create_schema(ctx.state);

        let response = schema
            .execute(
                r#"mutation { createDirector(firstName: "Jane", lastName: "Doe") { director { id fullname } } }"#,
            )
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        let id = json["createDirector"]["director"]["id"]
            .as_str()
            .unwrap()
            .to_string();
        assert_eq!(json["createDirector"]["director"]["fullname"], "Jane Doe");
        assert_eq!(catalog.director_count(), 1);

        let query = format!("{{ directorDetail(id: {id}) {{ fullname }} }}");
        let response = schema.execute(query).await;
        let json = response.data.into_json().unwrap();
        assert_eq!(json["directorDetail"]["fullname"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_create_director_missing_argument_fails_validation() {
        let ctx = build_test_context();
        let catalog = ctx.catalog.clone();
        let schema = create_schema(ctx.state);

        let response = schema
            .execute(r#"mutation { createDirector(firstName: "Jane") { director { id } } }"#)
            .await;

        assert!(!response.errors.is_empty());
        assert_eq!(catalog.director_count(), 0);
    }

    #[tokio::test]
    async fn test_create_director_name_too_long_is_rejected() {
        let ctx = build_test_context();
        let catalog = ctx.catalog.clone();
        let schema = create_schema(ctx.state);

        let long_name = "x".repeat(33);
        let query = format!(
            r#"mutation {{ createDirector(firstName: "{long_name}", lastName: "Doe") {{ director {{ id }} }} }}"#
        );
        let response = schema.execute(query).await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].message,
            "Ensure this value has at most 32 characters (it has 33)."
        );
        assert_eq!(
            error_code(&response.errors[0]),
            Some(Value::from("BAD_USER_INPUT"))
        );
        assert_eq!(catalog.director_count(), 0);
    }

    #[tokio::test]
    async fn test_create_director_multibyte_name_at_limit_is_accepted() {
        let ctx = build_test_context();
        let catalog = ctx.catalog.clone();
        let schema = create_schema(ctx.state);

        let name = "ō".repeat(32);
        let query = format!(
            r#"mutation {{ createDirector(firstName: "{name}", lastName: "Ozu") {{ director {{ id firstName }} }} }}"#
        );
        let response = schema.execute(query).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(json["createDirector"]["director"]["firstName"], name.as_str());
        assert_eq!(catalog.director_count(), 1);
    }

    #[tokio::test]
    async fn test_create_director_multibyte_name_over_limit_counts_characters() {
        let ctx = build_test_context();
        let catalog = ctx.catalog.clone();
        let schema = create_schema(ctx.state);

        let name = "ō".repeat(33);
        let query = format!(
            r#"mutation {{ createDirector(firstName: "{name}", lastName: "Ozu") {{ director {{ id }} }} }}"#
        );
        let response = schema.execute(query).await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].message,
            "Ensure this value has at most 32 characters (it has 33)."
        );
        assert_eq!(catalog.director_count(), 0);
    }

    #[tokio::test]
    async fn test_update_director_multibyte_name_is_accepted() {
        let ctx = build_test_context();
        let director = ctx.catalog.insert_director("Yasujiro", "Ozu");
        let catalog = ctx.catalog.clone();
        let schema = create_schema(ctx.state);

        let name = "ō".repeat(20);
        let query = format!(
            r#"mutation {{ updateDirector(id: "{}", firstName: "{name}") {{ director {{ firstName }} }} }}"#,
            director.id
        );
        let response = schema.execute(query).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(catalog.director(director.id).unwrap().first_name, name);
    }

    #[tokio::test]
    async fn test_update_director_keeps_omitted_fields() {
        let ctx = build_test_context();
        let director = ctx.catalog.insert_director("Spike", "Lee");
        let catalog = ctx.catalog.clone();
        let schema = create_schema(ctx.state);

        let query = format!(
            r#"mutation {{ updateDirector(id: "{}", firstName: "Ann") {{ director {{ firstName lastName }} }} }}"#,
            director.id
        );
        let response = schema.execute(query).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(
            json["updateDirector"]["director"],
            json!({ "firstName": "Ann", "lastName": "Lee" })
        );
        let stored = catalog.director(director.id).unwrap();
        assert_eq!(stored.first_name, "Ann");
        assert_eq!(stored.last_name, "Lee");
    }

    #[tokio::test]
    async fn test_update_director_explicit_null_keeps_value() {
        let ctx = build_test_context();
        let director = ctx.catalog.insert_director("Spike", "Lee");
        let catalog = ctx.catalog.clone();
        let schema = create_schema(ctx.state);

        let query = format!(
            r#"mutation {{ updateDirector(id: "{}", firstName: null, lastName: "Jonze") {{ director {{ fullname }} }} }}"#,
            director.id
        );
        let response = schema.execute(query).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(catalog.director(director.id).unwrap().full_name(), "Spike Jonze");
    }

    #[tokio::test]
    async fn test_update_director_with_variables() {
        let ctx = build_test_context();
        let director = ctx.catalog.insert_director("Spike", "Lee");
        let schema = create_schema(ctx.state);

        let request = Request::new(
            "mutation Update($id: ID!, $last: String) { updateDirector(id: $id, lastName: $last) { director { fullname } } }",
        )
        .variables(async_graphql::Variables::from_json(json!({
            "id": director.id.to_string(),
            "last": "Jonze",
        })));
        let response = schema.execute(request).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(json["updateDirector"]["director"]["fullname"], "Spike Jonze");
    }

    #[tokio::test]
    async fn test_update_missing_director_is_not_found() {
        let ctx = build_test_context();
        let schema = create_schema(ctx.state);

        let response = schema
            .execute(r#"mutation { updateDirector(id: "77", firstName: "Ann") { director { id } } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            error_code(&response.errors[0]),
            Some(Value::from("NOT_FOUND"))
        );
    }

    #[tokio::test]
    async fn test_update_director_non_numeric_id_is_bad_input() {
        let ctx = build_test_context();
        let director = ctx.catalog.insert_director("Spike", "Lee");
        let catalog = ctx.catalog.clone();
        let schema = create_schema(ctx.state);

        let response = schema
            .execute(r#"mutation { updateDirector(id: "abc", firstName: "Ann") { director { id } } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            error_code(&response.errors[0]),
            Some(Value::from("BAD_USER_INPUT"))
        );
        assert_eq!(catalog.director(director.id).unwrap().first_name, "Spike");
    }

    #[tokio::test]
    async fn test_delete_director_cascades_and_returns_null() {
        let ctx = build_test_context();
        let kurosawa = ctx.catalog.insert_director("Akira", "Kurosawa");
        let ozu = ctx.catalog.insert_director("Yasujirō", "Ozu");
        ctx.catalog
            .insert_movie("Ran", Some(1985), Some(kurosawa.id))
            .unwrap();
        ctx.catalog
            .insert_movie("Ikiru", Some(1952), Some(kurosawa.id))
            .unwrap();
        let tokyo = ctx
            .catalog
            .insert_movie("Tokyo Story", Some(1953), Some(ozu.id))
            .unwrap();
        let catalog = ctx.catalog.clone();
        let schema = create_schema(ctx.state);

        let query = format!(
            r#"mutation {{ deleteDirector(id: "{}") {{ director {{ id }} }} }}"#,
            kurosawa.id
        );
        let response = schema.execute(query).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(json["deleteDirector"], json!({ "director": null }));
        assert_eq!(catalog.movie_count(), 1);
        assert!(catalog.movie(tokyo.id).is_some());

        let query = format!("{{ directorDetail(id: {}) {{ id }} }}", kurosawa.id);
        let response = schema.execute(query).await;
        assert_eq!(
            error_code(&response.errors[0]),
            Some(Value::from("NOT_FOUND"))
        );
    }

    #[tokio::test]
    async fn test_delete_missing_director_is_not_found() {
        let ctx = build_test_context();
        let schema = create_schema(ctx.state);

        let response = schema
            .execute(r#"mutation { deleteDirector(id: "5") { director { id } } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].message,
            "Director matching query does not exist."
        );
        let json = response.data.into_json().unwrap();
        assert!(json["deleteDirector"].is_null());
    }

    #[tokio::test]
    async fn test_authenticated_user_sees_nested_fields_under_all_movies() {
        let ctx = build_test_context();
        let lynch = ctx.catalog.insert_director("David", "Lynch");
        ctx.catalog
            .insert_movie("Eraserhead", Some(1977), Some(lynch.id))
            .unwrap();
        let (app_ctx, _) = seed_user(&ctx.auth, "alice").await;
        let schema = create_schema(ctx.state);

        let request = Request::new("{ allMovies { title director { lastName } } }").data(app_ctx);
        let response = schema.execute(request).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(
            json["allMovies"],
            json!([{ "title": "Eraserhead", "director": { "lastName": "Lynch" } }])
        );
    }

    #[tokio::test]
    async fn test_mutations_do_not_require_a_token() {
        let ctx = build_test_context();
        let schema = create_schema(ctx.state);

        let request = Request::new(
            r#"mutation { createDirector(firstName: "Lynne", lastName: "Ramsay") { director { fullname } } }"#,
        )
        .data(anonymous());
        let response = schema.execute(request).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
    }
}
