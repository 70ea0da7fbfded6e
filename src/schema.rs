diesel::table! {
    form_documents (id) {
        id -> Integer,
        user_id -> Text,
        // Empty string for user-scoped documents; sqlite UNIQUE treats NULLs
        // as distinct, which would break the upsert.
        project_id -> Text,
        form_letter -> Text,
        payload -> Text,
        saved_at -> Timestamp,
    }
}

diesel::table! {
    shared_fields (user_id) {
        user_id -> Text,
        organization_name -> Text,
        contact_person -> Text,
        time_period -> Text,
        updated_at -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(form_documents, shared_fields,);
