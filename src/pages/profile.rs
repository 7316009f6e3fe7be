// Own-profile view and edit form
use std::collections::HashMap;

use chrono::NaiveDate;
use leptos::*;

use crate::api::use_api;
use crate::components::buttons::{OutlineButton, PrimaryButton};
use crate::components::forms::{SelectInput, TextInput};
use crate::components::layout::{EmptyState, ErrorPanel, PageHeader};
use crate::components::notifications::use_toasts;
use crate::hooks::use_request;
use crate::types::{BloodType, Gender, UpdateProfilePayload, User};
use crate::utils::{display_or_dash, format_date, user_full_name};

fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::M => "Masculino",
        Gender::F => "Femenino",
    }
}

fn parse_blood_type(raw: &str) -> Option<BloodType> {
    match raw {
        "A+" => Some(BloodType::APos),
        "A-" => Some(BloodType::ANeg),
        "B+" => Some(BloodType::BPos),
        "B-" => Some(BloodType::BNeg),
        "AB+" => Some(BloodType::AbPos),
        "AB-" => Some(BloodType::AbNeg),
        "O+" => Some(BloodType::OPos),
        "O-" => Some(BloodType::ONeg),
        _ => None,
    }
}

/// Editable form values, all as raw strings; converted into the partial
/// update payload on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub alias: String,
    pub gender: String,
    pub birth_date: String,
    pub shirt_size: String,
    pub pants_size: String,
    pub shoe_size: String,
    pub height_meters: String,
    pub weight_kg: String,
    pub health_insurance: String,
    pub blood_type: String,
    pub allergies: String,
    pub current_residence: String,
    pub professional_goal: String,
    pub favorite_hero: String,
}

impl ProfileFormValues {
    pub fn from_user(user: &User) -> Self {
        let profile = user.profile.as_ref();
        let text = |value: Option<&String>| value.cloned().unwrap_or_default();
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            alias: text(profile.and_then(|p| p.alias.as_ref())),
            gender: profile
                .and_then(|p| p.gender)
                .map(|g| match g {
                    Gender::M => "M".to_string(),
                    Gender::F => "F".to_string(),
                })
                .unwrap_or_default(),
            birth_date: profile
                .and_then(|p| p.birth_date)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            shirt_size: text(profile.and_then(|p| p.shirt_size.as_ref())),
            pants_size: text(profile.and_then(|p| p.pants_size.as_ref())),
            shoe_size: text(profile.and_then(|p| p.shoe_size.as_ref())),
            height_meters: profile
                .and_then(|p| p.height_meters)
                .map(|h| h.to_string())
                .unwrap_or_default(),
            weight_kg: profile
                .and_then(|p| p.weight_kg)
                .map(|w| w.to_string())
                .unwrap_or_default(),
            health_insurance: text(profile.and_then(|p| p.health_insurance.as_ref())),
            blood_type: profile
                .and_then(|p| p.blood_type)
                .map(|bt| bt.as_str().to_string())
                .unwrap_or_default(),
            allergies: text(profile.and_then(|p| p.allergies.as_ref())),
            current_residence: text(profile.and_then(|p| p.current_residence.as_ref())),
            professional_goal: text(profile.and_then(|p| p.professional_goal.as_ref())),
            favorite_hero: text(profile.and_then(|p| p.favorite_hero.as_ref())),
        }
    }

    /// Validates and converts into the wire payload. Empty fields are
    /// simply not sent.
    pub fn to_payload(&self) -> Result<UpdateProfilePayload, HashMap<String, String>> {
        let mut errors = HashMap::new();

        let opt = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        let birth_date = match opt(&self.birth_date) {
            Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.insert("birthDate".to_string(), "Formato inválido".to_string());
                    None
                }
            },
            None => None,
        };
        let height_meters = match opt(&self.height_meters) {
            Some(raw) => match raw.parse::<f64>() {
                Ok(height) => Some(height),
                Err(_) => {
                    errors.insert("heightMeters".to_string(), "Número inválido".to_string());
                    None
                }
            },
            None => None,
        };
        let weight_kg = match opt(&self.weight_kg) {
            Some(raw) => match raw.parse::<f64>() {
                Ok(weight) => Some(weight),
                Err(_) => {
                    errors.insert("weightKg".to_string(), "Número inválido".to_string());
                    None
                }
            },
            None => None,
        };
        let gender = match self.gender.as_str() {
            "M" => Some(Gender::M),
            "F" => Some(Gender::F),
            _ => None,
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(UpdateProfilePayload {
            first_name: opt(&self.first_name),
            last_name: opt(&self.last_name),
            email: opt(&self.email),
            gender,
            birth_date,
            alias: opt(&self.alias),
            shirt_size: opt(&self.shirt_size),
            pants_size: opt(&self.pants_size),
            shoe_size: opt(&self.shoe_size),
            height_meters,
            weight_kg,
            health_insurance: opt(&self.health_insurance),
            blood_type: parse_blood_type(self.blood_type.trim()),
            allergies: opt(&self.allergies),
            current_residence: opt(&self.current_residence),
            professional_goal: opt(&self.professional_goal),
            favorite_hero: opt(&self.favorite_hero),
            ..Default::default()
        })
    }
}

#[component]
fn DetailField(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div>
            <dt class="text-xs font-medium uppercase tracking-wide text-gray-500">{label}</dt>
            <dd class="mt-0.5 text-sm text-gray-900">{value}</dd>
        </div>
    }
}

#[component]
fn Section(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="rounded-lg bg-white p-4 shadow">
            <h3 class="mb-3 text-base font-semibold text-gray-900">{title}</h3>
            <dl class="grid grid-cols-1 gap-3 sm:grid-cols-2">{children()}</dl>
        </section>
    }
}

/// Sectioned read-only rendering of a user with their profile. Also used
/// by the listing's detail side panel.
#[component]
pub fn ProfileSections(user: User) -> impl IntoView {
    let profile = user.profile.clone();
    let identity_profile = profile.clone();
    let identity = view! {
        <Section title="Datos personales">
            <DetailField label="Nombre completo" value=user_full_name(&user)/>
            <DetailField label="Correo" value=user.email.clone()/>
            <DetailField label="DNI" value=display_or_dash(user.dni.clone())/>
            <DetailField
                label="Estado"
                value=if user.is_active() { "Activo" } else { "Inactivo" }
            />
            <DetailField
                label="Alias"
                value=display_or_dash(identity_profile.as_ref().and_then(|p| p.alias.clone()))
            />
            <DetailField
                label="Género"
                value=display_or_dash(
                    identity_profile.as_ref().and_then(|p| p.gender).map(|g| gender_label(g).to_string()),
                )
            />
            <DetailField
                label="Fecha de nacimiento"
                value=display_or_dash(
                    identity_profile.as_ref().and_then(|p| p.birth_date).map(|d| format_date(&d)),
                )
            />
            <DetailField
                label="Edad"
                value=display_or_dash(
                    identity_profile.as_ref().and_then(|p| p.age).map(|age| age.to_string()),
                )
            />
        </Section>
    };

    match profile {
        Some(profile) => view! {
            <div class="space-y-4">
                {identity}
                <Section title="Tallas y medidas">
                    <DetailField
                        label="Uniforme"
                        value=display_or_dash(profile.has_uniform.map(|has| {
                            if has { "Sí".to_string() } else { "No".to_string() }
                        }))
                    />
                    <DetailField label="Camisa" value=display_or_dash(profile.shirt_size.clone())/>
                    <DetailField label="Pantalón" value=display_or_dash(profile.pants_size.clone())/>
                    <DetailField label="Calzado" value=display_or_dash(profile.shoe_size.clone())/>
                    <DetailField
                        label="Estatura (m)"
                        value=display_or_dash(profile.height_meters.map(|h| format!("{h:.2}")))
                    />
                    <DetailField
                        label="Peso (kg)"
                        value=display_or_dash(profile.weight_kg.map(|w| format!("{w:.1}")))
                    />
                </Section>
                <Section title="Salud">
                    <DetailField
                        label="Seguro de salud"
                        value=display_or_dash(profile.health_insurance.clone())
                    />
                    <DetailField
                        label="Tipo de sangre"
                        value=display_or_dash(profile.blood_type.map(|bt| bt.as_str().to_string()))
                    />
                    <DetailField label="Alergias" value=display_or_dash(profile.allergies.clone())/>
                    <DetailField
                        label="Discapacidad o trastorno"
                        value=display_or_dash(profile.disability_or_disorder.clone())
                    />
                </Section>
                <Section title="Inscripción">
                    <DetailField
                        label="Fecha de inscripción"
                        value=display_or_dash(profile.enrollment_date.map(|d| format_date(&d)))
                    />
                    <DetailField
                        label="Fecha de registro"
                        value=display_or_dash(profile.registration_date.map(|d| format_date(&d)))
                    />
                    <DetailField
                        label="Residencia actual"
                        value=display_or_dash(profile.current_residence.clone())
                    />
                    <DetailField
                        label="Meta profesional"
                        value=display_or_dash(profile.professional_goal.clone())
                    />
                    <DetailField
                        label="Héroe favorito"
                        value=display_or_dash(profile.favorite_hero.clone())
                    />
                </Section>
            </div>
        }
        .into_view(),
        None => view! {
            <div class="space-y-4">
                {identity}
                <EmptyState
                    title="Perfil incompleto"
                    description="Este usuario aún no ha completado su información de perfil."
                />
            </div>
        }
        .into_view(),
    }
}

#[component]
fn ProfileEditForm(
    user: User,
    #[prop(into)] on_saved: Callback<User>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();

    let initial = ProfileFormValues::from_user(&user);
    let first_name = create_rw_signal(initial.first_name.clone());
    let last_name = create_rw_signal(initial.last_name.clone());
    let email = create_rw_signal(initial.email.clone());
    let alias = create_rw_signal(initial.alias.clone());
    let gender = create_rw_signal(initial.gender.clone());
    let birth_date = create_rw_signal(initial.birth_date.clone());
    let shirt_size = create_rw_signal(initial.shirt_size.clone());
    let pants_size = create_rw_signal(initial.pants_size.clone());
    let shoe_size = create_rw_signal(initial.shoe_size.clone());
    let height_meters = create_rw_signal(initial.height_meters.clone());
    let weight_kg = create_rw_signal(initial.weight_kg.clone());
    let health_insurance = create_rw_signal(initial.health_insurance.clone());
    let blood_type = create_rw_signal(initial.blood_type.clone());
    let allergies = create_rw_signal(initial.allergies.clone());
    let current_residence = create_rw_signal(initial.current_residence.clone());
    let professional_goal = create_rw_signal(initial.professional_goal.clone());
    let favorite_hero = create_rw_signal(initial.favorite_hero.clone());

    let field_errors = create_rw_signal(HashMap::<String, String>::new());
    let general_error = create_rw_signal(None::<String>);

    let save = create_action(move |payload: &UpdateProfilePayload| {
        let api = api.clone();
        let payload = payload.clone();
        async move {
            match api.update_my_profile(&payload).await {
                Ok(updated) => {
                    toasts.success("Perfil actualizado");
                    on_saved.call(updated);
                }
                Err(err) => {
                    field_errors.set(err.field_errors().unwrap_or_default());
                    general_error.set(Some(err.message()));
                }
            }
        }
    });
    let is_saving = save.pending();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        general_error.set(None);
        let values = ProfileFormValues {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            alias: alias.get_untracked(),
            gender: gender.get_untracked(),
            birth_date: birth_date.get_untracked(),
            shirt_size: shirt_size.get_untracked(),
            pants_size: pants_size.get_untracked(),
            shoe_size: shoe_size.get_untracked(),
            height_meters: height_meters.get_untracked(),
            weight_kg: weight_kg.get_untracked(),
            health_insurance: health_insurance.get_untracked(),
            blood_type: blood_type.get_untracked(),
            allergies: allergies.get_untracked(),
            current_residence: current_residence.get_untracked(),
            professional_goal: professional_goal.get_untracked(),
            favorite_hero: favorite_hero.get_untracked(),
        };
        match values.to_payload() {
            Ok(payload) => {
                field_errors.set(HashMap::new());
                save.dispatch(payload);
            }
            Err(errors) => field_errors.set(errors),
        }
    };

    let error_for = move |field: &'static str| {
        Signal::derive(move || field_errors.get().get(field).cloned())
    };

    let gender_options = vec![
        (String::new(), "Sin especificar".to_string()),
        ("M".to_string(), "Masculino".to_string()),
        ("F".to_string(), "Femenino".to_string()),
    ];
    let mut blood_options = vec![(String::new(), "Sin especificar".to_string())];
    for bt in ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"] {
        blood_options.push((bt.to_string(), bt.to_string()));
    }

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <div class="rounded-lg bg-white p-4 shadow">
                <h3 class="mb-3 text-base font-semibold text-gray-900">"Datos personales"</h3>
                <div class="grid grid-cols-1 gap-x-4 sm:grid-cols-2">
                    <TextInput label="Nombre" name="firstName" value=first_name error=error_for("firstName")/>
                    <TextInput label="Apellido" name="lastName" value=last_name error=error_for("lastName")/>
                    <TextInput label="Correo" name="email" value=email input_type="email" error=error_for("email")/>
                    <TextInput label="Alias" name="alias" value=alias error=error_for("alias")/>
                    <SelectInput label="Género" name="gender" value=gender options=gender_options/>
                    <TextInput
                        label="Fecha de nacimiento"
                        name="birthDate"
                        value=birth_date
                        input_type="date"
                        error=error_for("birthDate")
                    />
                </div>
            </div>
            <div class="rounded-lg bg-white p-4 shadow">
                <h3 class="mb-3 text-base font-semibold text-gray-900">"Tallas y medidas"</h3>
                <div class="grid grid-cols-1 gap-x-4 sm:grid-cols-2">
                    <TextInput label="Camisa" name="shirtSize" value=shirt_size/>
                    <TextInput label="Pantalón" name="pantsSize" value=pants_size/>
                    <TextInput label="Calzado" name="shoeSize" value=shoe_size/>
                    <TextInput
                        label="Estatura (m)"
                        name="heightMeters"
                        value=height_meters
                        error=error_for("heightMeters")
                    />
                    <TextInput
                        label="Peso (kg)"
                        name="weightKg"
                        value=weight_kg
                        error=error_for("weightKg")
                    />
                </div>
            </div>
            <div class="rounded-lg bg-white p-4 shadow">
                <h3 class="mb-3 text-base font-semibold text-gray-900">"Salud"</h3>
                <div class="grid grid-cols-1 gap-x-4 sm:grid-cols-2">
                    <TextInput label="Seguro de salud" name="healthInsurance" value=health_insurance/>
                    <SelectInput label="Tipo de sangre" name="bloodType" value=blood_type options=blood_options/>
                    <TextInput label="Alergias" name="allergies" value=allergies/>
                </div>
            </div>
            <div class="rounded-lg bg-white p-4 shadow">
                <h3 class="mb-3 text-base font-semibold text-gray-900">"Otros"</h3>
                <div class="grid grid-cols-1 gap-x-4 sm:grid-cols-2">
                    <TextInput label="Residencia actual" name="currentResidence" value=current_residence/>
                    <TextInput label="Meta profesional" name="professionalGoal" value=professional_goal/>
                    <TextInput label="Héroe favorito" name="favoriteHero" value=favorite_hero/>
                </div>
            </div>
            {move || {
                general_error.get().map(|message| view! {
                    <div class="rounded-lg bg-red-50 p-3">
                        <p class="text-sm font-medium text-red-800">{message}</p>
                    </div>
                })
            }}
            <div class="flex justify-end gap-2">
                <OutlineButton text="Cancelar" on_click=on_cancel/>
                <PrimaryButton
                    text="Guardar cambios"
                    button_type="submit"
                    disabled=Signal::derive(move || is_saving.get())
                />
            </div>
        </form>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = use_api();
    let profile_req = use_request::<User>();
    let editing = create_rw_signal(false);

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            profile_req.run(async move { api.get_my_profile().await })
        }
    };
    fetch();
    let retry = fetch.clone();

    view! {
        <div>
            <PageHeader title="Mi Perfil" description="Revisa y actualiza tu información"/>
            {move || {
                if profile_req.is_loading.get() {
                    return view! {
                        <div class="space-y-4">
                            <div class="h-40 animate-pulse rounded-lg bg-gray-200"></div>
                            <div class="h-40 animate-pulse rounded-lg bg-gray-200"></div>
                        </div>
                    }
                    .into_view();
                }
                if let Some(err) = profile_req.error.get() {
                    let retry = retry.clone();
                    return view! {
                        <div class="rounded-lg bg-white shadow">
                            <ErrorPanel
                                message=err.message()
                                on_retry=Callback::new(move |_| retry())
                            />
                        </div>
                    }
                    .into_view();
                }
                match profile_req.data.get() {
                    Some(user) if editing.get() => view! {
                        <ProfileEditForm
                            user=user
                            on_saved=Callback::new(move |updated: User| {
                                profile_req.data.set(Some(updated));
                                editing.set(false);
                            })
                            on_cancel=Callback::new(move |_| editing.set(false))
                        />
                    }
                    .into_view(),
                    Some(user) => view! {
                        <div class="space-y-4">
                            <div class="flex justify-end">
                                <PrimaryButton
                                    text="Editar perfil"
                                    on_click=Callback::new(move |_| editing.set(true))
                                />
                            </div>
                            <ProfileSections user=user/>
                        </div>
                    }
                    .into_view(),
                    None => ().into_view(),
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_produces_empty_payload() {
        let payload = ProfileFormValues::default().to_payload().unwrap();
        assert_eq!(payload, UpdateProfilePayload::default());
        assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");
    }

    #[test]
    fn form_values_convert_and_trim() {
        let values = ProfileFormValues {
            first_name: "  Ana ".to_string(),
            gender: "F".to_string(),
            birth_date: "1999-01-31".to_string(),
            height_meters: "1.65".to_string(),
            blood_type: "O+".to_string(),
            ..Default::default()
        };
        let payload = values.to_payload().unwrap();
        assert_eq!(payload.first_name.as_deref(), Some("Ana"));
        assert_eq!(payload.gender, Some(Gender::F));
        assert_eq!(
            payload.birth_date,
            Some(NaiveDate::from_ymd_opt(1999, 1, 31).unwrap())
        );
        assert_eq!(payload.height_meters, Some(1.65));
        assert_eq!(payload.blood_type, Some(BloodType::OPos));
        assert!(payload.weight_kg.is_none());
    }

    #[test]
    fn invalid_numbers_and_dates_are_reported_per_field() {
        let values = ProfileFormValues {
            birth_date: "31-01-1999".to_string(),
            height_meters: "uno".to_string(),
            weight_kg: "70".to_string(),
            ..Default::default()
        };
        let errors = values.to_payload().unwrap_err();
        assert_eq!(errors.get("birthDate").unwrap(), "Formato inválido");
        assert_eq!(errors.get("heightMeters").unwrap(), "Número inválido");
        assert!(!errors.contains_key("weightKg"));
    }

    #[test]
    fn form_round_trips_from_user() {
        let user: User = serde_json::from_str(
            r#"{
                "uuid": "8f9c2b6e-0a1d-4c3e-9b2f-1a2b3c4d5e6f",
                "firstName": "Ana",
                "lastName": "Quispe",
                "email": "ana@example.com",
                "slug": "ana-quispe",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z",
                "profile": {
                    "uuid": "0f9c2b6e-0a1d-4c3e-9b2f-1a2b3c4d5e60",
                    "gender": "F",
                    "age": 25,
                    "birthDate": "1999-01-31",
                    "status": "A",
                    "alias": "Anita",
                    "hasUniform": true,
                    "shirtSize": "M",
                    "pantsSize": "28",
                    "shoeSize": "37",
                    "heightMeters": 1.65,
                    "weightKg": 58.5,
                    "healthInsurance": "EsSalud",
                    "bloodType": "O+",
                    "allergies": null,
                    "disabilityOrDisorder": null,
                    "enrollmentDate": "2023-01-01",
                    "currentResidence": "Lima",
                    "professionalGoal": null,
                    "favoriteHero": null,
                    "firstNames": null,
                    "lastNames": null,
                    "registrationDate": "2024-01-01"
                }
            }"#,
        )
        .unwrap();
        let values = ProfileFormValues::from_user(&user);
        assert_eq!(values.gender, "F");
        assert_eq!(values.birth_date, "1999-01-31");
        assert_eq!(values.blood_type, "O+");
        let payload = values.to_payload().unwrap();
        assert_eq!(payload.alias.as_deref(), Some("Anita"));
    }
}
