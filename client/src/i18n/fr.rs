//! French translation table.

use super::keys::*;

pub static FR: TranslationKeys = TranslationKeys {
    common: CommonKeys {
        loading: "Chargement...",
        error: "Une erreur est survenue. Veuillez réessayer.",
        success: "Terminé.",
        close: "Fermer",
        back: "Retour",
        cancel: "Annuler",
        confirm: "Confirmer",
        server_unreachable: "Impossible de joindre le serveur. Vérifiez votre connexion et réessayez.",
    },
    nav: NavKeys {
        home: "Accueil",
        play: "Jouer",
        login: "Connexion",
        signup: "Créer un compte",
        logout: "Déconnexion",
    },
    auth: AuthKeys {
        login: LoginKeys {
            title: "Connexion",
            username_or_email: "Pseudo ou email",
            password: "Mot de passe",
            submit: "Se connecter",
            loading: "Connexion...",
            error: "Identifiants incorrects.",
            no_account: "Pas encore de compte ?",
            create_account: "Créez-en un",
            forgot_password: "Mot de passe oublié ?",
        },
        register: RegisterKeys {
            title: "Créer votre compte",
            username: "Pseudo",
            email: "Email",
            password: "Mot de passe",
            confirm_password: "Confirmer le mot de passe",
            submit: "Créer le compte",
            loading: "Création du compte...",
            success: "Compte créé. Consultez votre boîte mail pour valider votre adresse.",
            error: "Impossible de créer le compte.",
            have_account: "Déjà un compte ?",
            sign_in: "Connectez-vous",
        },
        password_reset: PasswordResetKeys {
            title: "Réinitialiser votre mot de passe",
            email: "Email",
            submit: "Envoyer l'email de réinitialisation",
            success: "Email de réinitialisation envoyé.",
            redirect: "Redirection vers la connexion...",
            invalid_token: "Ce lien de réinitialisation est invalide ou a expiré.",
            new_password: "Nouveau mot de passe",
            confirm_password: "Confirmer le nouveau mot de passe",
            confirm_submit: "Définir le nouveau mot de passe",
            changed: "Mot de passe mis à jour. Vous pouvez maintenant vous connecter.",
            error: "Impossible de réinitialiser le mot de passe.",
        },
        email_validation: EmailValidationKeys {
            title: "Validation de l'email",
            validating: "Validation de votre adresse email...",
            success: "Email validé.",
            redirect: "Redirection vers la connexion...",
            invalid_token: "Ce lien de validation est invalide ou a expiré.",
            error: "Impossible de valider l'adresse email.",
        },
        account: AccountKeys {
            profile: "Profil",
            logout: "Déconnexion",
            logout_loading: "Déconnexion...",
            details_title: "Compte",
            username_label: "Pseudo",
            email_label: "Email",
            member_since: "Membre depuis",
            email_not_validated: "Email pas encore validé.",
            email_change_title: "Changer d'email",
            new_email: "Nouvel email",
            email_change_submit: "Mettre à jour l'email",
            email_change_success: "Consultez votre nouvelle boîte mail pour confirmer le changement.",
            email_change_same_error: "C'est déjà votre adresse email.",
            forbidden_domain: "Ce domaine email n'est pas autorisé.",
            password_change_title: "Changer de mot de passe",
            current_password: "Mot de passe actuel",
            new_password: "Nouveau mot de passe",
            confirm_password: "Confirmer le nouveau mot de passe",
            password_change_submit: "Mettre à jour le mot de passe",
            password_change_success: "Mot de passe mis à jour. Vous allez être déconnecté.",
            danger_zone_title: "Zone dangereuse",
            delete_account: "Supprimer le compte",
            delete_warning: "Cette action supprime définitivement votre compte et votre progression. Aucun retour possible.",
            delete_success: "Compte supprimé. À bientôt, commandant.",
        },
        account_state: AccountStateKeys {
            created_account: "Ce compte n'est pas encore validé. Consultez votre boîte mail.",
            banned_account: "Ce compte a été banni.",
            disabled_account: "Ce compte a été désactivé.",
        },
        password_rules: PasswordRuleKeys {
            min_length: "Au moins 8 caractères.",
            char_types: "Mélangez au moins trois types : majuscules, minuscules, chiffres, symboles.",
        },
    },
    validation: ValidationKeys {
        required: "Ce champ est obligatoire.",
        invalid_email: "Saisissez une adresse email valide.",
        invalid_username: "3 à 30 lettres et chiffres uniquement.",
        forbidden_email_domain: "Ce domaine email n'est pas autorisé.",
        password_mismatch: "Les mots de passe ne correspondent pas.",
    },
    home: HomeKeys {
        meta_title: "Starhold — prenez le commandement",
        meta_description: "Starhold est un jeu de stratégie spatiale persistant. Construisez votre station, levez une flotte et tenez la ligne — directement dans votre navigateur.",
        hero_title: "Prenez le commandement",
        hero_subtitle: "Construisez votre station, levez une flotte et tenez la ligne dans une galaxie persistante dirigée par les joueurs.",
        hero_cta: "Jouer gratuitement",
        hero_cta_play: "Reprendre le commandement",
        features_title: "Conçu pour les longues campagnes",
        features: [
            Feature {
                title: "Galaxie persistante",
                body: "La guerre continue pendant votre sommeil. Donnez des ordres permanents et découvrez leurs conséquences au réveil.",
            },
            Feature {
                title: "Aucune installation",
                body: "Le jeu complet tourne dans votre navigateur. Un compte, n'importe quelle machine, la même flotte.",
            },
            Feature {
                title: "Économie gérée par les joueurs",
                body: "Chaque coque, obus et ration de la galaxie a été transporté par quelqu'un.",
            },
        ],
        community_title: "Rejoignez l'armada",
        community_body: "Coordonnez-vous avec des milliers de commandants qui façonnent la même carte.",
        community_cta: "Créer votre compte",
    },
    play: PlayKeys {
        meta_title: "Starhold — jouer",
        loading_version: "Recherche de la version active...",
        loading_game: "Chargement du jeu",
        fullscreen: "Plein écran",
        failed: "Impossible de lancer le jeu",
    },
    legal: LegalKeys {
        terms: LegalDoc {
            title: "Conditions d'utilisation",
            updated: "Dernière mise à jour : juin 2025",
            sections: &[
                LegalSection {
                    heading: "1. Le service",
                    body: "Starhold est un jeu en ligne exploité par Starhold Interactive. En créant un compte, vous acceptez ces conditions dans leur intégralité.",
                },
                LegalSection {
                    heading: "2. Votre compte",
                    body: "Vous êtes responsable de vos identifiants et de tout ce qui est fait avec. Un compte par personne ; la vente ou le partage de comptes est interdit.",
                },
                LegalSection {
                    heading: "3. Fair-play",
                    body: "L'automatisation, les exploits et le harcèlement entraînent des sanctions pouvant aller jusqu'à la fermeture définitive du compte.",
                },
                LegalSection {
                    heading: "4. Résiliation",
                    body: "Vous pouvez supprimer votre compte à tout moment depuis le panneau de compte. Nous pouvons suspendre les comptes qui enfreignent ces conditions.",
                },
            ],
        },
        privacy: LegalDoc {
            title: "Politique de confidentialité",
            updated: "Dernière mise à jour : juin 2025",
            sections: &[
                LegalSection {
                    heading: "1. Ce que nous stockons",
                    body: "Votre adresse email, votre pseudo et vos données de jeu. Les mots de passe ne sont stockés que sous forme de hachés salés sur nos serveurs.",
                },
                LegalSection {
                    heading: "2. Ce que nous ne faisons jamais",
                    body: "Nous ne vendons pas de données personnelles et n'utilisons aucun traceur publicitaire tiers.",
                },
                LegalSection {
                    heading: "3. Vos droits",
                    body: "Vous pouvez exporter ou supprimer définitivement vos données depuis le panneau de compte, ou en contactant le support.",
                },
            ],
        },
        cookies: LegalDoc {
            title: "Politique de cookies",
            updated: "Dernière mise à jour : juin 2025",
            sections: &[
                LegalSection {
                    heading: "1. Strictement nécessaires",
                    body: "Un cookie de session vous garde connecté entre deux visites. Le stockage local met en cache votre jeton d'accès sur cet appareil.",
                },
                LegalSection {
                    heading: "2. Rien d'autre",
                    body: "Aucun cookie d'analyse ou de publicité n'est déposé par ce site.",
                },
            ],
        },
    },
    footer: FooterKeys {
        rights: "Tous droits réservés.",
        terms: "Conditions",
        privacy: "Confidentialité",
        cookies: "Cookies",
    },
    not_found: NotFoundKeys {
        title: "Perdu dans l'espace",
        body: "Cette page n'existe pas, ou a dérivé hors de portée des capteurs.",
        back_home: "Retour à la passerelle",
    },
};
