//! Static translation bundles and typed lookup.
//!
//! Every string the client shows is addressed by a [`Key`]. A lookup either
//! finds a value in the requested bundle or reports [`Lookup::Missing`];
//! [`t`] then walks the fallback chain requested language → base language →
//! literal key name.

use super::language::{BASE_LANGUAGE, Language};

/// A translatable string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    WelcomeMessage,
    FallbackResponse,
    YourMedicalAssistant,
    TypeMessage,
    ChatHistory,
    NoHistory,
    NewChat,
    DeleteChat,
    Messages,
    Thinking,
    Translating,
    LanguageChanged,
    SignIn,
    SignOut,
    Register,
    Email,
    Password,
    ConfirmPassword,
    FullName,
    DateOfBirth,
    Phone,
    WelcomeBack,
    WelcomeBackDesc,
    CreateAccount,
    RegistrationSuccess,
    RegistrationSuccessDesc,
    SignedOut,
    SignedOutDesc,
    PasswordMismatch,
    SpeechNotSupported,
    SpeechNotSupportedDesc,
    TtsNotSupported,
    TtsNotSupportedDesc,
    NothingToSpeak,
    MessageFailed,
    MessageFailedDesc,
    HistoryLoadFailed,
    HistoryLoadFailedDesc,
    SessionLoaded,
    SessionLoadedDesc,
    SessionLoadFailed,
    SessionLoadFailedDesc,
    SessionDeleted,
    SessionDeletedDesc,
    SessionDeleteFailed,
    SessionDeleteFailedDesc,
    TranslationFailed,
    TranslationFailedDesc,
    SignInRequiredDesc,
    Disclaimer,
}

impl Key {
    /// The key's literal name, shown when no bundle has a value for it.
    pub const fn name(self) -> &'static str {
        match self {
            Self::WelcomeMessage => "welcomeMessage",
            Self::FallbackResponse => "fallbackResponse",
            Self::YourMedicalAssistant => "yourMedicalAssistant",
            Self::TypeMessage => "typeMessage",
            Self::ChatHistory => "chatHistory",
            Self::NoHistory => "noHistory",
            Self::NewChat => "newChat",
            Self::DeleteChat => "deleteChat",
            Self::Messages => "messages",
            Self::Thinking => "thinking",
            Self::Translating => "translating",
            Self::LanguageChanged => "languageChanged",
            Self::SignIn => "signIn",
            Self::SignOut => "signOut",
            Self::Register => "register",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::FullName => "fullName",
            Self::DateOfBirth => "dateOfBirth",
            Self::Phone => "phone",
            Self::WelcomeBack => "welcomeBack",
            Self::WelcomeBackDesc => "welcomeBackDesc",
            Self::CreateAccount => "createAccount",
            Self::RegistrationSuccess => "registrationSuccess",
            Self::RegistrationSuccessDesc => "registrationSuccessDesc",
            Self::SignedOut => "signedOut",
            Self::SignedOutDesc => "signedOutDesc",
            Self::PasswordMismatch => "passwordMismatch",
            Self::SpeechNotSupported => "speechNotSupported",
            Self::SpeechNotSupportedDesc => "speechNotSupportedDesc",
            Self::TtsNotSupported => "ttsNotSupported",
            Self::TtsNotSupportedDesc => "ttsNotSupportedDesc",
            Self::NothingToSpeak => "nothingToSpeak",
            Self::MessageFailed => "messageFailed",
            Self::MessageFailedDesc => "messageFailedDesc",
            Self::HistoryLoadFailed => "historyLoadFailed",
            Self::HistoryLoadFailedDesc => "historyLoadFailedDesc",
            Self::SessionLoaded => "sessionLoaded",
            Self::SessionLoadedDesc => "sessionLoadedDesc",
            Self::SessionLoadFailed => "sessionLoadFailed",
            Self::SessionLoadFailedDesc => "sessionLoadFailedDesc",
            Self::SessionDeleted => "sessionDeleted",
            Self::SessionDeletedDesc => "sessionDeletedDesc",
            Self::SessionDeleteFailed => "sessionDeleteFailed",
            Self::SessionDeleteFailedDesc => "sessionDeleteFailedDesc",
            Self::TranslationFailed => "translationFailed",
            Self::TranslationFailedDesc => "translationFailedDesc",
            Self::SignInRequiredDesc => "signInRequiredDesc",
            Self::Disclaimer => "disclaimer",
        }
    }
}

/// Result of looking a key up in a single bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found(&'static str),
    Missing,
}

impl Lookup {
    pub const fn value(self) -> Option<&'static str> {
        match self {
            Self::Found(value) => Some(value),
            Self::Missing => None,
        }
    }
}

/// Looks `key` up in the bundle for `language` only, without fallback.
pub fn lookup(language: Language, key: Key) -> Lookup {
    let value = match language {
        Language::English => Some(english(key)),
        Language::French => Some(french(key)),
        Language::Ewondo | Language::Douala | Language::Bassa => language_names(key),
    };
    value.map_or(Lookup::Missing, Lookup::Found)
}

/// Resolves `key` for `language`, falling back to the base language and then
/// to the key's literal name.
pub fn t(language: Language, key: Key) -> &'static str {
    fallback_chain(language)
        .into_iter()
        .find_map(|lang| lookup(lang, key).value())
        .unwrap_or_else(|| key.name())
}

/// Like [`t`], substituting `{name}` placeholders with `params`.
pub fn t_with(language: Language, key: Key, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(t(language, key).to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

fn fallback_chain(language: Language) -> Vec<Language> {
    if language == BASE_LANGUAGE {
        vec![language]
    } else {
        vec![language, BASE_LANGUAGE]
    }
}

const fn english(key: Key) -> &'static str {
    match key {
        Key::WelcomeMessage => {
            "Hello! I'm your medical assistant. Describe your symptoms or ask a health \
             question and I'll do my best to help. For emergencies, contact your local \
             emergency services immediately."
        }
        Key::FallbackResponse => {
            "I'm sorry, I'm having technical difficulties right now. Please try again later \
             or consult a healthcare professional if you have urgent medical concerns."
        }
        Key::YourMedicalAssistant => "Your medical assistant",
        Key::TypeMessage => "Type your message...",
        Key::ChatHistory => "Chat history",
        Key::NoHistory => "No previous conversations.",
        Key::NewChat => "New chat",
        Key::DeleteChat => "Delete chat",
        Key::Messages => "messages",
        Key::Thinking => "Thinking...",
        Key::Translating => "Translating conversation...",
        Key::LanguageChanged => "Language set to {language}",
        Key::SignIn => "Sign in",
        Key::SignOut => "Sign out",
        Key::Register => "Register",
        Key::Email => "Email",
        Key::Password => "Password",
        Key::ConfirmPassword => "Confirm password",
        Key::FullName => "Full name",
        Key::DateOfBirth => "Date of birth",
        Key::Phone => "Phone",
        Key::WelcomeBack => "Welcome back!",
        Key::WelcomeBackDesc => "You have successfully signed in to MediChat AI.",
        Key::CreateAccount => "Create account",
        Key::RegistrationSuccess => "Registration successful!",
        Key::RegistrationSuccessDesc => "Your account has been created. Welcome to MediChat AI!",
        Key::SignedOut => "Signed out",
        Key::SignedOutDesc => "You have been successfully signed out.",
        Key::PasswordMismatch => "Passwords do not match.",
        Key::SpeechNotSupported => "Speech recognition not supported",
        Key::SpeechNotSupportedDesc => "Voice input is not available on this system.",
        Key::TtsNotSupported => "Text-to-speech not supported",
        Key::TtsNotSupportedDesc => {
            "No speech program is configured. Set tts_command in the configuration file."
        }
        Key::NothingToSpeak => "There is no assistant message to read aloud.",
        Key::MessageFailed => "Message failed",
        Key::MessageFailedDesc => "Failed to send message. Please try again.",
        Key::HistoryLoadFailed => "Failed to load history",
        Key::HistoryLoadFailedDesc => "Could not load chat history.",
        Key::SessionLoaded => "Session loaded",
        Key::SessionLoadedDesc => "Loaded {count} messages from {name}",
        Key::SessionLoadFailed => "Failed to load session",
        Key::SessionLoadFailedDesc => "Could not load chat session.",
        Key::SessionDeleted => "Session deleted",
        Key::SessionDeletedDesc => "Chat session has been permanently deleted.",
        Key::SessionDeleteFailed => "Failed to delete session",
        Key::SessionDeleteFailedDesc => "Could not delete chat session.",
        Key::TranslationFailed => "Translation failed",
        Key::TranslationFailedDesc => "Could not translate chat messages. Please try again.",
        Key::SignInRequiredDesc => "Your sign-in has expired. Run 'medichat login' and try again.",
        Key::Disclaimer => {
            "This assistant provides general health information and does not replace \
             professional medical advice."
        }
    }
}

const fn french(key: Key) -> &'static str {
    match key {
        Key::WelcomeMessage => {
            "Bonjour ! Je suis votre assistant médical. Décrivez vos symptômes ou posez une \
             question de santé et je ferai de mon mieux pour vous aider. En cas d'urgence, \
             contactez immédiatement les services d'urgence."
        }
        Key::FallbackResponse => {
            "Désolé, je rencontre des difficultés techniques. Veuillez réessayer plus tard \
             ou consulter un professionnel de santé en cas d'urgence médicale."
        }
        Key::YourMedicalAssistant => "Votre assistant médical",
        Key::TypeMessage => "Tapez votre message...",
        Key::ChatHistory => "Historique des conversations",
        Key::NoHistory => "Aucune conversation précédente.",
        Key::NewChat => "Nouvelle conversation",
        Key::DeleteChat => "Supprimer la conversation",
        Key::Messages => "messages",
        Key::Thinking => "Réflexion...",
        Key::Translating => "Traduction de la conversation...",
        Key::LanguageChanged => "Langue définie : {language}",
        Key::SignIn => "Se connecter",
        Key::SignOut => "Se déconnecter",
        Key::Register => "S'inscrire",
        Key::Email => "E-mail",
        Key::Password => "Mot de passe",
        Key::ConfirmPassword => "Confirmer le mot de passe",
        Key::FullName => "Nom complet",
        Key::DateOfBirth => "Date de naissance",
        Key::Phone => "Téléphone",
        Key::WelcomeBack => "Bon retour !",
        Key::WelcomeBackDesc => "Vous êtes connecté à MediChat AI.",
        Key::CreateAccount => "Créer un compte",
        Key::RegistrationSuccess => "Inscription réussie !",
        Key::RegistrationSuccessDesc => "Votre compte a été créé. Bienvenue sur MediChat AI !",
        Key::SignedOut => "Déconnecté",
        Key::SignedOutDesc => "Vous avez été déconnecté.",
        Key::PasswordMismatch => "Les mots de passe ne correspondent pas.",
        Key::SpeechNotSupported => "Reconnaissance vocale non prise en charge",
        Key::SpeechNotSupportedDesc => "La saisie vocale n'est pas disponible sur ce système.",
        Key::TtsNotSupported => "Synthèse vocale non prise en charge",
        Key::TtsNotSupportedDesc => {
            "Aucun programme de synthèse vocale n'est configuré. Définissez tts_command \
             dans le fichier de configuration."
        }
        Key::NothingToSpeak => "Aucun message de l'assistant à lire.",
        Key::MessageFailed => "Échec de l'envoi",
        Key::MessageFailedDesc => "Impossible d'envoyer le message. Veuillez réessayer.",
        Key::HistoryLoadFailed => "Échec du chargement de l'historique",
        Key::HistoryLoadFailedDesc => "Impossible de charger l'historique des conversations.",
        Key::SessionLoaded => "Conversation chargée",
        Key::SessionLoadedDesc => "{count} messages chargés depuis {name}",
        Key::SessionLoadFailed => "Échec du chargement de la conversation",
        Key::SessionLoadFailedDesc => "Impossible de charger la conversation.",
        Key::SessionDeleted => "Conversation supprimée",
        Key::SessionDeletedDesc => "La conversation a été définitivement supprimée.",
        Key::SessionDeleteFailed => "Échec de la suppression",
        Key::SessionDeleteFailedDesc => "Impossible de supprimer la conversation.",
        Key::TranslationFailed => "Échec de la traduction",
        Key::TranslationFailedDesc => {
            "Impossible de traduire les messages. Veuillez réessayer."
        }
        Key::SignInRequiredDesc => {
            "Votre connexion a expiré. Lancez 'medichat login' puis réessayez."
        }
        Key::Disclaimer => {
            "Cet assistant fournit des informations générales sur la santé et ne remplace \
             pas l'avis d'un professionnel de santé."
        }
    }
}

// Only proper nouns are bundled for the Cameroonian languages; everything else
// resolves through the base language.
const fn language_names(key: Key) -> Option<&'static str> {
    match key {
        Key::Messages => Some("messages"),
        _ => None,
    }
}
