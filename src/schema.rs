diesel::table! {
    appointments (id) {
        id -> Integer,
        patient_id -> Nullable<Integer>,
        provider_id -> Integer,
        patient_name -> Text,
        provider_name -> Text,
        service -> Text,
        start_time -> Timestamp,
        end_time -> Timestamp,
        status -> Text,
        notes -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    availabilities (id) {
        id -> Integer,
        provider_id -> Integer,
        start_time -> Timestamp,
        end_time -> Timestamp,
    }
}

diesel::table! {
    providers (id) {
        id -> Integer,
        user_id -> Integer,
        specialty_id -> Integer,
        location -> Text,
    }
}

diesel::table! {
    specialties (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    users (id) {
        id -> Integer,
        username -> Text,
        password -> Text,
        email -> Text,
        first_name -> Text,
        last_name -> Text,
        created_at -> Timestamp,
    }
}

diesel::joinable!(appointments -> providers (provider_id));
diesel::joinable!(availabilities -> providers (provider_id));
diesel::joinable!(providers -> specialties (specialty_id));
diesel::joinable!(providers -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    appointments,
    availabilities,
    providers,
    specialties,
    users,
);
