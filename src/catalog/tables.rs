//! Static vocabulary tables
//!
//! SNOMED CT value sets of the Swiss EPR document metadata, with displays
//! in en, de, fr, it and rm (in that order).

use super::CodeEntry;

const fn entry(code: &'static str, display: &'static str, displays: [&'static str; 5]) -> CodeEntry {
    CodeEntry {
        code,
        display,
        displays,
    }
}

/// DocumentEntry.classCode, mapped to DocumentReference.category
pub(super) static CLASS_CODES: &[CodeEntry] = &[
    entry(
        "371531000",
        "Report of clinical encounter",
        [
            "Report of clinical encounter",
            "Bericht aufgrund einer Konsultation",
            "Rapport suite à une consultation",
            "Rapporto di visita medica",
            "Rapport sin basa d'ina consultaziun",
        ],
    ),
    entry(
        "721927009",
        "Referral note",
        [
            "Referral note",
            "Zuweisungsschreiben",
            "Lettre de référence",
            "Lettera d'invio",
            "Brev d'assegnaziun",
        ],
    ),
    entry(
        "721963009",
        "Order",
        [
            "Order",
            "Untersuchungsauftrag",
            "Mandat d'analyse",
            "Prescrizione di analisi",
            "Incumbensa da consultaziun",
        ],
    ),
    entry(
        "422735006",
        "Summary clinical document",
        [
            "Summary clinical document",
            "Zusammenfassender Bericht",
            "Rapport de synthèse",
            "Rapporto riassuntivo",
            "Rapport medicinal resumà",
        ],
    ),
    entry(
        "371525003",
        "Clinical procedure report",
        [
            "Clinical procedure report",
            "Interventionsbericht / Untersuchungsresultat",
            "Rapport d'intervention / résultat de l’analyse",
            "Rapporto operatorio / Referto di analisi",
            "Rapport d'intervenziun / resultat da la consultaziun",
        ],
    ),
    entry(
        "734163000",
        "Care Plan",
        [
            "Care Plan",
            "Behandlungsplan",
            "Plan de traitement",
            "Piano di trattamento",
            "Plan da tractament",
        ],
    ),
    entry(
        "440545006",
        "Prescription record",
        [
            "Prescription record",
            "Verschreibung / Rezept",
            "Prescription / ordonnance",
            "Prescrizione medica",
            "Prescripziun / recept",
        ],
    ),
    entry(
        "184216000",
        "Patient record type",
        [
            "Patient record type",
            "Langzeitdokumentation",
            "Documentation à long terme",
            "Documentazione a lungo termine",
            "Documentaziun da lunga durada",
        ],
    ),
    entry(
        "371537001",
        "Consent report",
        [
            "Consent report",
            "Einwilligung zur Behandlung",
            "Consentement au traitement",
            "Consenso al trattamento",
            "Consentiment al tractament",
        ],
    ),
    entry(
        "371538006",
        "Advance directive report",
        [
            "Advance directive report",
            "Patientenverfügung",
            "Directives anticipées",
            "Direttive del paziente",
            "Disposiziun dal pazient",
        ],
    ),
    entry(
        "722160009",
        "Audit trail report",
        [
            "Audit trail report",
            "Rückverfolgung der EPD Zugriffe",
            "Traçabilité des accès aux DEP",
            "Cronologia degli accessi alla CIP",
            "Repersequitabladad da l'access al DEP",
        ],
    ),
    entry(
        "722216001",
        "Emergency medical identification record",
        [
            "Emergency medical identification record",
            "Notfall-ID / Ausweis",
            "ID d'urgence / carte d’urgence",
            "Identificativo d'emergenza / scheda d'emergenza",
            "Carta d'identitad per cas d'urgenza / document d'identitad",
        ],
    ),
    entry(
        "772790007",
        "Organ donor card",
        [
            "Organ donor card",
            "Organspendeausweis",
            "Carte de donneur d'organes",
            "Tessera di donatore di organi",
            "Attest da donatur d'organs",
        ],
    ),
    entry(
        "405624007",
        "Administrative documentation",
        [
            "Administrative documentation",
            "Administratives Dokument",
            "Document administratif",
            "Documento amministrativo",
            "Document administrativ",
        ],
    ),
    entry(
        "417319006",
        "Record of health event",
        [
            "Record of health event",
            "Dokument zu gesundheitsrelevantem Ereignis",
            "Document sur l'événement sanitaire",
            "Documento concernente un evento rilevante per la salute",
            "Document concernent  in eveniment relevant per la sanadad",
        ],
    ),
    entry(
        "419891008",
        "Record artifact",
        [
            "Record artifact",
            "Nicht näher bezeichnetes Dokument",
            "Document non précisé",
            "Documento non meglio specificato",
            "Document betg designà pli precis",
        ],
    ),
    entry(
        "2171000195109",
        "Obstetrical Record",
        [
            "Obstetrical Record",
            "Schwangerschafts-/ Geburtsbericht",
            "Rapport de grossesse / de naissance",
            "Referto della gravidanza / del parto",
            "Rapport da gravidanza / da naschientscha",
        ],
    ),
];

/// DocumentEntry.typeCode, mapped to DocumentReference.type
pub(super) static TYPE_CODES: &[CodeEntry] = &[
    entry(
        "371529009",
        "History and physical report",
        [
            "History and physical report",
            "Anamnese / Untersuchungsbericht",
            "Anamnèse / rapport d'analyse",
            "Anamnesi / Rapporto di visita medica",
            "Anamnesa / rapport da consultaziun",
        ],
    ),
    entry(
        "419891008",
        "Record artifact",
        [
            "Record artifact",
            "Nicht näher bezeichnetes Dokument",
            "Document non précisé",
            "Documento non meglio specificato",
            "Document betg specifitgà pli precis",
        ],
    ),
    entry(
        "721965002",
        "Laboratory Order",
        [
            "Laboratory Order",
            "Laborauftrag",
            "Mandat d'analyse en laboratoire",
            "Richiesta di analisi di laboratorio",
            "Incumbensa da labor",
        ],
    ),
    entry(
        "721966001",
        "Pathology order",
        [
            "Pathology order",
            "Pathologieauftrag",
            "Mandat de rapport d'examen pathologique",
            "Richiesta di esame istologico",
            "Incumbensa da patologia",
        ],
    ),
    entry(
        "4201000179104",
        "Imaging report",
        [
            "Imaging report",
            "Befundbericht zur Bildgebung",
            "Rapport de résultat relatif à l'imagerie",
            "Referto di immaginografia",
            "Rapport dal resultat dals maletgs",
        ],
    ),
    entry(
        "737427001",
        "Clinical Management plan",
        [
            "Clinical Management plan",
            "Behandlungsplan",
            "Plan de traitement",
            "Piano di trattamento",
            "Plan da tractament",
        ],
    ),
    entry(
        "765492005",
        "Non-drug prescription",
        [
            "Non-drug prescription",
            "Nicht-Arzneimittel-Verschreibung / Rezept",
            "Prescription sans médicaments / ordonnance",
            "Prescrizione non di medicamenti",
            "Prescripziun senza medischinas / recept",
        ],
    ),
    entry(
        "773130005",
        "Nursing care plan",
        [
            "Nursing care plan",
            "Pflegeplan",
            "Plan de soins",
            "Piano di cura",
            "Plan da tgira",
        ],
    ),
    entry(
        "736055001",
        "Rehabilitation care plan",
        [
            "Rehabilitation care plan",
            "Rehabilitationsplan",
            "Plan de réhabilitation",
            "Piano di riabilitazione",
            "Plan da reabilitaziun",
        ],
    ),
    entry(
        "761938008",
        "Medical Prescription record",
        [
            "Medical Prescription record",
            "Arzneimittel-Verschreibung / Rezept",
            "Prescription de médicaments / ordonnance",
            "Prescrizione di medicamenti",
            "Prescripziun da medischinas / recept",
        ],
    ),
    entry(
        "722446000",
        "Allergy record",
        [
            "Allergy record",
            "Allergieausweis",
            "Carnet des allergies",
            "Passaporto delle allergie",
            "Attest d'allergia",
        ],
    ),
    entry(
        "772786005",
        "Medical certificate",
        [
            "Medical certificate",
            "Ärztliches Attest",
            "Certificat médical",
            "Certificato medico",
            "Attest medical",
        ],
    ),
    entry(
        "373942005",
        "Discharge summary",
        [
            "Discharge summary",
            "Austrittsbericht",
            "Rapport de sortie",
            "Rapporto di dimissione",
            "Rapport d'extrada",
        ],
    ),
    entry(
        "371535009",
        "Transfer summary report",
        [
            "Transfer summary report",
            "Überweisungsbericht",
            "Rapport de transfert",
            "Rapporto di trasferimento",
            "Rapport d'assegnaziun",
        ],
    ),
    entry(
        "445300006",
        "Emergency department record",
        [
            "Emergency department record",
            "Notfallbericht",
            "Rapport d'urgence",
            "Referto di pronto soccorso",
            "Rapport davart in cas d'urgenza",
        ],
    ),
    entry(
        "445418005",
        "Professional allied to medicine clinical report",
        [
            "Professional allied to medicine clinical report",
            "Dokument ausserhalb des Behandlungskontextes",
            "Document hors contexte de traitement",
            "Documento al di fuori del contesto trattato",
            "Document ordaifer il context dal tractament",
        ],
    ),
    entry(
        "371530004",
        "Consultation report",
        [
            "Consultation report",
            "Beurteilung durch Fachspezialisten",
            "Évaluation par des spécialistes",
            "Valutazione dello specialista",
            "Rapport da la consultaziun clinica",
        ],
    ),
    entry(
        "4241000179101",
        "Laboratory report",
        [
            "Laboratory report",
            "Laborbericht",
            "Rapport de laboratoire",
            "Referto di laboratorio",
            "Rapport da labor",
        ],
    ),
    entry(
        "371526002",
        "Operative report",
        [
            "Operative report",
            "Operationsbericht",
            "Rapport d'opération",
            "Rapporto operatorio",
            "Rapport d'operaziun",
        ],
    ),
    entry(
        "371532007",
        "Progress note",
        [
            "Progress note",
            "Verlaufsbericht",
            "Rapport d'historique",
            "Rapporto sul decorso",
            "Rapport da l'andament",
        ],
    ),
    entry(
        "900000000000471006",
        "Image",
        [
            "Image",
            "Bild",
            "Image",
            "Immagine",
            "Maletg",
        ],
    ),
    entry(
        "41000179103",
        "Immunization record",
        [
            "Immunization record",
            "Impfausweis",
            "Carnet de vaccination",
            "Certificato di vaccinazione",
            "Attest da vaccinaziun",
        ],
    ),
    entry(
        "371528001",
        "Pathology report",
        [
            "Pathology report",
            "Pathologiebericht",
            "Rapport d'examen pathologique",
            "Referto istologico",
            "Rapport da la patologia",
        ],
    ),
    entry(
        "721912009",
        "Medication summary document",
        [
            "Medication summary document",
            "Medikationsliste",
            "Liste de médication",
            "Elenco dei medicamenti",
            "Glista da medicaziun",
        ],
    ),
    entry(
        "2161000195103",
        "Imaging Order",
        [
            "Imaging Order",
            "Bildgebungsauftrag",
            "Mandat d'imagerie",
            "Richiesta di immaginografia",
            "Incumbensa da far in maletg",
        ],
    ),
];

/// DocumentEntry.healthcareFacilityTypeCode, mapped to DocumentReference.context.facilityType
pub(super) static FACILITY_CODES: &[CodeEntry] = &[
    entry(
        "722171005",
        "Diagnostic institution",
        [
            "Diagnostic institution",
            "Institution für medizinische Diagnostik",
            "Institut d'aide au diagnostic",
            "Istituto di diagnostica medica",
            "Instituziun per diagnostica medicinala",
        ],
    ),
    entry(
        "225728007",
        "Accident and Emergency department",
        [
            "Accident and Emergency department",
            "Notfall-/Rettungsdienste",
            "Service d'urgence et de sauvetage",
            "Servizio di pronto soccorso e di salvataggio",
            "Servetsch d'urgenza e da salvament",
        ],
    ),
    entry(
        "394747008",
        "Health Authority",
        [
            "Health Authority",
            "Gesundheitsbehörde",
            "Autorité sanitaire",
            "Autorità sanitaria",
            "Autoritad da sanadad",
        ],
    ),
    entry(
        "66280005",
        "Private home-based care",
        [
            "Private home-based care",
            "Organisation für Pflege zu Hause",
            "Soins à domicile",
            "Servizio di assistenza e cura a domicilio",
            "Organisaziun per la tgira a chasa",
        ],
    ),
    entry(
        "22232009",
        "Hospital",
        [
            "Hospital",
            "Stationäre Einrichtung/Spital",
            "Hôpital",
            "Ospedale",
            "Ospital",
        ],
    ),
    entry(
        "722172003",
        "Military health institution",
        [
            "Military health institution",
            "Armeeärztliche Dienste",
            "Service sanitaire de l'armée",
            "Servizio di medicina militare",
            "Servetsch da medischina militara",
        ],
    ),
    entry(
        "722173008",
        "Prison based care site",
        [
            "Prison based care site",
            "Gesundheitseinrichtung in der Haftanstalt",
            "Service de santé en milieu carcéral",
            "Struttura sanitaria in uno stabilimento carcerario",
            "Structura da sanadad en in stabiliment giudizial",
        ],
    ),
    entry(
        "42665001",
        "Nursing home",
        [
            "Nursing home",
            "Pflegeheim",
            "Etablissement médico-social",
            "Casa di cura",
            "Chasa da tgira",
        ],
    ),
    entry(
        "264372000",
        "Pharmacy",
        [
            "Pharmacy",
            "Apotheke",
            "Pharmacie",
            "Farmacia",
            "Apoteca",
        ],
    ),
    entry(
        "35971002",
        "Ambulatory care site",
        [
            "Ambulatory care site",
            "Ambulante Einrichtung/Ambulatorium",
            "Etablissement ambulatoire",
            "Struttura ambulatoriale, incl. gli studi medici",
            "Instituziun ambulanta/ambulatori",
        ],
    ),
    entry(
        "80522000",
        "Rehabilitation hospital",
        [
            "Rehabilitation hospital",
            "Organisation für stationäre Rehabilitation",
            "Réadaptation stationnaire",
            "Istituto di riabilitazione stazionaria",
            "Institut da reabilitaziun staziunara",
        ],
    ),
    entry(
        "394778007",
        "Client's or patient's home",
        [
            "Client's or patient's home",
            "Domizil des Patienten",
            "Domicile du patient",
            "Domicilio del paziente",
            "Domicil dal pazient",
        ],
    ),
    entry(
        "288565001",
        "Telemedicine institution",
        [
            "Telemedicine institution",
            "Telemedizinische Einrichtung",
            "Institut de télémédecine",
            "Centro di telemedicina",
            "Instituziun da telemedischina",
        ],
    ),
    entry(
        "264358009",
        "General practice premises",
        [
            "General practice premises",
            "Arztpraxis",
            "Cabinet médical",
            "Studio medico",
            "Pratica da medi",
        ],
    ),
    entry(
        "43741000",
        "Other Site of Care",
        [
            "Other Site of Care",
            "Andere Gesundheitsorganisation",
            "Autres prestataires de soins",
            "Altre organizzazioni sanitarie",
            "Autras organisaziuns dals fatgs da tgira",
        ],
    ),
];

/// DocumentEntry.practiceSettingCode, mapped to DocumentReference.context.practiceSetting
pub(super) static PRACTICE_SETTING_CODES: &[CodeEntry] = &[
    entry(
        "394805004",
        "Clinical immunology/allergy",
        [
            "Clinical immunology/allergy",
            "Immunologie/Allergologie",
            "Immunologie/Allergologie",
            "Allergologia e immunologia clinica",
            "Immunologia/allergologia",
        ],
    ),
    entry(
        "394802001",
        "General medicine",
        [
            "General medicine",
            "Allgemeinmedizin",
            "Médecine générale",
            "Medicina generale",
            "Medischina generala",
        ],
    ),
    entry(
        "394577000",
        "Anaesthesiology",
        [
            "Anaesthesiology",
            "Anästhesiologie",
            "Anesthésiologie",
            "Anestesiologia",
            "Anestesiologia",
        ],
    ),
    entry(
        "722414000",
        "Vascular medicine",
        [
            "Vascular medicine",
            "Angiologie",
            "Angiologie",
            "Angiologia",
            "Angiologia",
        ],
    ),
    entry(
        "722170006",
        "Chiropractic service",
        [
            "Chiropractic service",
            "Chiropraktik",
            "Chiropractie",
            "Chiropratica",
            "Chiropratica",
        ],
    ),
    entry(
        "394609007",
        "General surgery",
        [
            "General surgery",
            "Chirurgie",
            "Chirurgie",
            "Chirurgia",
            "Chirurgia",
        ],
    ),
    entry(
        "394582007",
        "Dermatology",
        [
            "Dermatology",
            "Dermatologie und Venerologie",
            "Dermatologie et vénérologie",
            "Dermatologia e venereologia",
            "Dermatologia e venerologia",
        ],
    ),
    entry(
        "394583002",
        "Endocrinology",
        [
            "Endocrinology",
            "Endokrinologie/Diabetologie",
            "Endocrinologie/diabétologie",
            "Endocrinologia/diabetologia",
            "Endocrinologia/diabetologia",
        ],
    ),
    entry(
        "310093001",
        "Occupational therapy service",
        [
            "Occupational therapy service",
            "Ergotherapie",
            "Ergothérapie",
            "Ergoterapia",
            "Ergoterapia",
        ],
    ),
    entry(
        "722164000",
        "Dietetics and nutrition",
        [
            "Dietetics and nutrition",
            "Ernährungsberatung",
            "Conseil en nutrition et diététique",
            "Dietetica",
            "Cussegliaziun da nutriment",
        ],
    ),
    entry(
        "394584008",
        "Gastroenterology",
        [
            "Gastroenterology",
            "Gastroenterologie",
            "Gastroentérologie",
            "Gastroenterologia",
            "Gastroenterologia",
        ],
    ),
    entry(
        "394811001",
        "Geriatric medicine",
        [
            "Geriatric medicine",
            "Geriatrie",
            "Gériatrie",
            "Geriatria",
            "Geriatria",
        ],
    ),
    entry(
        "394586005",
        "Gynecology and Obstretrics",
        [
            "Gynecology and Obstretrics",
            "Gynäkologie und Geburtshilfe",
            "Gynécologie et obstétrique",
            "Ginecologia e ostetricia",
            "Ginecologia ed assistenza al part",
        ],
    ),
    entry(
        "394803006",
        "Clinical haematology",
        [
            "Clinical haematology",
            "Hématologie",
            "Hématologie",
            "Ematologia",
            "Hematologia",
        ],
    ),
    entry(
        "408466002",
        "Cardiac surgery",
        [
            "Cardiac surgery",
            "Herzchirurgie",
            "Chirurgie cardiovasculaire",
            "Chirurgia cardiovascolare",
            "Chirurgia dal cor",
        ],
    ),
    entry(
        "408480009",
        "Clinical immunology",
        [
            "Clinical immunology",
            "Immunologie",
            "Immunologie",
            "Immunologia",
            "Immunologia",
        ],
    ),
    entry(
        "394807007",
        "Infectious diseases",
        [
            "Infectious diseases",
            "Infektionskrankheiten",
            "Maladies infectieuses",
            "Malattia infettiva",
            "Malsognas infectusas",
        ],
    ),
    entry(
        "419192003",
        "Internal medicine",
        [
            "Internal medicine",
            "Innere Medizin",
            "Médecine interne",
            "Medicina interna",
            "Medischina interna",
        ],
    ),
    entry(
        "408478003",
        "Critical care medicine",
        [
            "Critical care medicine",
            "Intensivmedizin",
            "Médecine intensive",
            "Medicina intensiva",
            "Medischina intensiva",
        ],
    ),
    entry(
        "394579002",
        "Cardiology",
        [
            "Cardiology",
            "Kardiologie",
            "Cardiologie",
            "Cardiologia",
            "Cardiologia",
        ],
    ),
    entry(
        "310025004",
        "Complementary therapy",
        [
            "Complementary therapy",
            "Komplementärmedizin",
            "Médecine alternative et complémentaire",
            "Medicina complementare",
            "Medischina alternativa e cumplementara",
        ],
    ),
    entry(
        "708184003",
        "Laboratory service",
        [
            "Laboratory service",
            "Labormedizin",
            "Médecin de laboratoire",
            "Medicina di laboratorio",
            "Medischina da labor",
        ],
    ),
    entry(
        "310101009",
        "Speech and language therapy service",
        [
            "Speech and language therapy service",
            "Logopédie",
            "Logopédie",
            "Logopedia",
            "Logopedia",
        ],
    ),
    entry(
        "394580004",
        "Clinical genetics",
        [
            "Clinical genetics",
            "Medizinische Genetik",
            "Génétique médicale",
            "Genetica medica",
            "Genetica medicinala",
        ],
    ),
    entry(
        "408465003",
        "Oral and maxillofacial surgery",
        [
            "Oral and maxillofacial surgery",
            "Mund-, Kiefer- und Gesichtschirurgie",
            "Chirurgie dento-maxillo-faciale",
            "Chirurgia oro-maxillo-facciale",
            "Chirurgia da la bucca, da la missella e da la fatscha",
        ],
    ),
    entry(
        "394589003",
        "Nephrology",
        [
            "Nephrology",
            "Nephrologie",
            "Néphrologie",
            "Nefrologia",
            "Nefrologia",
        ],
    ),
    entry(
        "394610002",
        "Neurosurgery",
        [
            "Neurosurgery",
            "Neurochirurgie",
            "Neurochirurgie",
            "Neurochirurgia",
            "Neurochirurgia",
        ],
    ),
    entry(
        "394591006",
        "Neurology",
        [
            "Neurology",
            "Neurologie",
            "Neurologie",
            "Neurologia",
            "Neurologia",
        ],
    ),
    entry(
        "394576009",
        "Accident & emergency",
        [
            "Accident & emergency",
            "Notfall- und Rettungsmedizin",
            "Médecine d'urgence et de sauvetage",
            "Medicina d'urgenza e di salvataggio",
            "Medischina d'urgenza e da salvament",
        ],
    ),
    entry(
        "394649004",
        "Nuclear medicine",
        [
            "Nuclear medicine",
            "Nuklearmedizin",
            "Médecine nucléaire",
            "Medicina nucleare",
            "Medischina nucleara",
        ],
    ),
    entry(
        "394594003",
        "Ophthalmology",
        [
            "Ophthalmology",
            "Ophthalmologie",
            "Ophtalmologie",
            "Oftalmologia",
            "Oftalmologia",
        ],
    ),
    entry(
        "394801008",
        "Trauma and orthopedics",
        [
            "Trauma and orthopedics",
            "Orthopädie und Traumatologie",
            "Chirurgie orthopédique et traumatologie de l'appareil locomoteur",
            "Chirurgia ortopedica e traumatologia dell'apparato locomotore",
            "Ortopedia e traumatologia",
        ],
    ),
    entry(
        "416304004",
        "Osteopathic manipulative medicine",
        [
            "Osteopathic manipulative medicine",
            "Osteopathie",
            "Ostéopathie",
            "Osteopatia",
            "Osteopatia",
        ],
    ),
    entry(
        "418960008",
        "Otolaryngology",
        [
            "Otolaryngology",
            "Oto-Rhino-Laryngologie",
            "Oto-rhino-laryngologie",
            "Otorinolaringoiatria",
            "Oto-rino-laringologia",
        ],
    ),
    entry(
        "394537008",
        "Pediatrics",
        [
            "Pediatrics",
            "Pédiatrie",
            "Pédiatrie",
            "Pediatria",
            "Pediatria",
        ],
    ),
    entry(
        "394806003",
        "Palliative medicine",
        [
            "Palliative medicine",
            "Palliativmedizin",
            "Médecine palliative",
            "Medicina palliativa",
            "Medischina palliativa",
        ],
    ),
    entry(
        "394595002",
        "Pathology",
        [
            "Pathology",
            "Pathologie",
            "Pathologie",
            "Patologia",
            "Patologia",
        ],
    ),
    entry(
        "722165004",
        "Nursing",
        [
            "Nursing",
            "Pflege",
            "Soins",
            "Cure infermieristiche",
            "Tgira",
        ],
    ),
    entry(
        "394600006",
        "Clinical pharmacology",
        [
            "Clinical pharmacology",
            "Klinische Pharmakologie",
            "Pharmacologie clinique",
            "Farmacologia clinica",
            "Farmacologia clinica",
        ],
    ),
    entry(
        "310080006",
        "Pharmacy service",
        [
            "Pharmacy service",
            "Pharmazie-Dienstleistung",
            "Service pharmaceutique",
            "Farmacia",
            "Servetsch farmaceutic",
        ],
    ),
    entry(
        "722138006",
        "Physiotherapy",
        [
            "Physiotherapy",
            "Physiotherapie",
            "Physiothérapie",
            "Fisioterapia",
            "Fisioterapia",
        ],
    ),
    entry(
        "394611003",
        "Plastic surgery",
        [
            "Plastic surgery",
            "Plastische, Rekonstruktive und Ästhetische Chirurgie",
            "Chirurgie plastique, reconstructrice et esthétique",
            "Chirurgia plastica, ricostruttiva ed estetica",
            "Chirurgia plastica, reconstructiva ed estetica",
        ],
    ),
    entry(
        "418112009",
        "Pulmonary medicine",
        [
            "Pulmonary medicine",
            "Pneumologie",
            "Pneumologie",
            "Pneumologia",
            "Pneumologia",
        ],
    ),
    entry(
        "310087009",
        "Podiatry service",
        [
            "Podiatry service",
            "Podologie",
            "Podologie",
            "Podologia",
            "Podologia",
        ],
    ),
    entry(
        "409968004",
        "Preventive medicine",
        [
            "Preventive medicine",
            "Präventionsmedizin",
            "Médecine préventive",
            "Prevenzione",
            "Medischina preventiva",
        ],
    ),
    entry(
        "394587001",
        "Psychiatry",
        [
            "Psychiatry",
            "Psychiatrie und Psychotherapie",
            "Psychiatrie et psychothérapie",
            "Psichiatria e psicoterapia",
            "Psicoterapia",
        ],
    ),
    entry(
        "722162001",
        "Psychology",
        [
            "Psychology",
            "Psychologie",
            "Psychologie",
            "Psicologia",
            "Psicologia",
        ],
    ),
    entry(
        "721961006",
        "Psycho-Somatic medicine",
        [
            "Psycho-Somatic medicine",
            "Psychosomatik",
            "Psychosomatique",
            "Medicina psicosomatica",
            "Medischina psicosomatica",
        ],
    ),
    entry(
        "394914008",
        "Radiology",
        [
            "Radiology",
            "Radiologie",
            "Radiologie",
            "Radiologia",
            "Radiologia",
        ],
    ),
    entry(
        "419815003",
        "Radiation oncology",
        [
            "Radiation oncology",
            "Radio-Onkologie/Strahlentherapie",
            "Radio-oncologie / radiothérapie",
            "Radio-oncologia / radioterapia",
            "Radio-oncologia/radioterapia",
        ],
    ),
    entry(
        "722204007",
        "Legal medicine",
        [
            "Legal medicine",
            "Rechtsmedizin",
            "Médecine légale",
            "Medicina legale",
            "Medischina legala",
        ],
    ),
    entry(
        "394602003",
        "Rehabilitation",
        [
            "Rehabilitation",
            "Rehabilitation",
            "Réadaptation",
            "Riabilitazione",
            "Reabilitaziun",
        ],
    ),
    entry(
        "394810000",
        "Rheumatology",
        [
            "Rheumatology",
            "Rheumatologie",
            "Rhumatologie",
            "Reumatologia",
            "Reumatologia",
        ],
    ),
    entry(
        "408456005",
        "Thoracic surgery",
        [
            "Thoracic surgery",
            "Thoraxchirurgie",
            "Chirurgie thoracique",
            "Chirurgia toracica",
            "Chirurgia toraxala",
        ],
    ),
    entry(
        "394819004",
        "Transfusion medicine",
        [
            "Transfusion medicine",
            "Transfusionsmedizin",
            "Médecine transfusionnelle",
            "Medicina trasfusionale",
            "Transfusiun da sang",
        ],
    ),
    entry(
        "408448007",
        "Tropical medicine",
        [
            "Tropical medicine",
            "Tropen- und Reisemedizin",
            "Médecine tropicale et des voyages",
            "Medicina tropicale e di viaggio",
            "Medischina da las tropas e da viadis",
        ],
    ),
    entry(
        "394612005",
        "Urology",
        [
            "Urology",
            "Urologie",
            "Urologie",
            "Urologia",
            "Urologia",
        ],
    ),
    entry(
        "394812008",
        "Dental medicine",
        [
            "Dental medicine",
            "Zahnheilkunde",
            "Odontologie",
            "Odontoiatria",
            "Medischina dentala",
        ],
    ),
    entry(
        "394592004",
        "Clinical oncology",
        [
            "Clinical oncology",
            "Onkologie",
            "Oncologie",
            "Oncologia medica",
            "Oncologia",
        ],
    ),
    entry(
        "408477008",
        "Transplant surgery",
        [
            "Transplant surgery",
            "Transplantationsmedizin",
            "Médecine de la transplantation",
            "Medicina dei trapianti",
            "Medischina da transplantaziun",
        ],
    ),
    entry(
        "394658006",
        "Other clinical specialty",
        [
            "Other clinical specialty",
            "Andere nicht näher spezifizierte medizinische Fachrichtung",
            "Autres spécialisations non spécifiées",
            "Altre specialità mediche non meglio precisate",
            "Auters secturs medicinals betg precisads",
        ],
    ),
];

/// Allowed type codes per class code
pub(super) static CLASS_TYPE_COMBINATIONS: &[(&str, &[&str])] = &[
    ("405624007", &["772786005", "419891008"]),
    ("371538006", &["419891008"]),
    ("722160009", &["419891008"]),
    ("734163000", &["737427001", "773130005", "736055001", "419891008"]),
    ("371525003", &["371526002", "4241000179101", "371528001", "4201000179104", "900000000000471006", "419891008"]),
    ("371537001", &["419891008"]),
    ("722216001", &["419891008"]),
    ("2171000195109", &["419891008"]),
    ("721963009", &["721965002", "721966001", "2161000195103", "419891008"]),
    ("772790007", &["419891008"]),
    ("184216000", &["722446000", "41000179103", "419891008"]),
    ("440545006", &["761938008", "765492005", "419891008"]),
    ("417319006", &["445300006", "445418005", "419891008"]),
    ("721927009", &["419891008"]),
    ("371531000", &["371530004", "371529009", "371532007", "419891008"]),
    ("422735006", &["373942005", "371535009", "721912009", "419891008"]),
    ("419891008", &["419891008"]),
];
