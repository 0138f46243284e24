use std::collections::BTreeMap;

use crate::quiz::domain::{Profile, RiasecType};

struct ProfileSeed {
    riasec_type: RiasecType,
    name: &'static str,
    icon: &'static str,
    description: &'static str,
    color: &'static str,
    subdivisions: [&'static str; 10],
    careers: [&'static str; 5],
}

const SEEDS: [ProfileSeed; 6] = [
    ProfileSeed {
        riasec_type: RiasecType::R,
        name: "Realista",
        icon: "IconTool",
        description: "Você é prático, objetivo e gosta de trabalhar com as mãos. Prefere atividades concretas e tangíveis, resolver problemas reais e ver resultados imediatos do seu trabalho.",
        color: "hsl(142, 71%, 45%)",
        subdivisions: [
            "REALISTA",
            "EXECUÇÃO",
            "ROTINA",
            "SEGURANÇA",
            "MANUTENÇÃO",
            "PRODUÇÃO",
            "OPERAÇÃO",
            "RESISTÊNCIA",
            "CONSTÂNCIA",
            "FERRAMENTAS",
        ],
        careers: [
            "Engenharia",
            "Mecânica",
            "Agricultura",
            "Construção Civil",
            "Eletricista",
        ],
    },
    ProfileSeed {
        riasec_type: RiasecType::I,
        name: "Investigativo",
        icon: "IconMicroscope",
        description: "Você é curioso, analítico e adora entender como as coisas funcionam. Gosta de pesquisar, estudar e resolver problemas complexos usando lógica e raciocínio.",
        color: "hsl(217, 91%, 60%)",
        subdivisions: [
            "ESTUDO",
            "ANÁLISE",
            "INVESTIGAÇÃO",
            "PESQUISA",
            "DIAGNÓSTICO",
            "CURIOSIDADE",
            "RACIOCÍNIO",
            "LÓGICA",
            "TEORIA",
            "OBSERVAÇÃO",
        ],
        careers: [
            "Ciência",
            "Pesquisa",
            "Medicina",
            "Tecnologia",
            "Análise de Dados",
        ],
    },
    ProfileSeed {
        riasec_type: RiasecType::A,
        name: "Artístico",
        icon: "IconPalette",
        description: "Você é criativo, expressivo e valoriza a originalidade. Gosta de ambientes livres onde pode usar sua imaginação e criar coisas novas.",
        color: "hsl(262, 83%, 58%)",
        subdivisions: [
            "CRIATIVIDADE",
            "EXPRESSÃO",
            "MUDANÇA",
            "IMAGINAÇÃO",
            "INTUIÇÃO",
            "ESTÉTICA",
            "ESTILO",
            "INOVAÇÃO",
            "EXPERIÊNCIAS",
            "IDENTIDADE",
        ],
        careers: [
            "Design",
            "Música",
            "Escrita",
            "Artes Visuais",
            "Publicidade",
        ],
    },
    ProfileSeed {
        riasec_type: RiasecType::S,
        name: "Social",
        icon: "IconUsersGroup",
        description: "Você é empático, cooperativo e gosta de ajudar os outros. Se realiza em atividades que envolvem ensinar, orientar e cuidar das pessoas.",
        color: "hsl(330, 81%, 60%)",
        subdivisions: [
            "GRUPO",
            "COMUNICAÇÃO",
            "EMPATIA",
            "COLABORAÇÃO",
            "AJUDA",
            "ENSINO",
            "CUIDADO",
            "ESCUTA",
            "APOIO",
            "COOPERAÇÃO",
        ],
        careers: ["Educação", "Psicologia", "Serviço Social", "Saúde", "RH"],
    },
    ProfileSeed {
        riasec_type: RiasecType::E,
        name: "Empreendedor",
        icon: "IconRocket",
        description: "Você é líder, persuasivo e motivado por desafios. Gosta de influenciar pessoas, tomar decisões e buscar resultados ambiciosos.",
        color: "hsl(25, 95%, 53%)",
        subdivisions: [
            "LIDERANÇA",
            "RISCO",
            "EXPOSIÇÃO",
            "PERSUASÃO",
            "INFLUÊNCIA",
            "DECISÃO",
            "AMBIÇÃO",
            "COMPETIÇÃO",
            "INICIATIVA",
            "VISÃO",
        ],
        careers: ["Administração", "Vendas", "Marketing", "Direito", "Gestão"],
    },
    ProfileSeed {
        riasec_type: RiasecType::C,
        name: "Convencional",
        icon: "IconChartBar",
        description: "Você é organizado, metódico e detalhista. Gosta de seguir processos, trabalhar com dados e manter tudo em ordem.",
        color: "hsl(47, 96%, 53%)",
        subdivisions: [
            "ORGANIZAÇÃO",
            "CONTROLE",
            "PADRÃO",
            "REGRAS",
            "PRECISÃO",
            "ESTRUTURA",
            "PLANEJAMENTO",
            "CONFORMIDADE",
            "DADOS",
            "DOCUMENTAÇÃO",
        ],
        careers: [
            "Contabilidade",
            "Finanças",
            "Administração",
            "Logística",
            "Auditoria",
        ],
    },
];

pub fn default_profiles() -> BTreeMap<RiasecType, Profile> {
    SEEDS
        .iter()
        .map(|seed| {
            let profile = Profile {
                riasec_type: seed.riasec_type,
                name: seed.name.to_string(),
                icon: seed.icon.to_string(),
                description: seed.description.to_string(),
                color: seed.color.to_string(),
                subdivisions: seed.subdivisions.iter().map(|s| s.to_string()).collect(),
                careers: seed.careers.iter().map(|s| s.to_string()).collect(),
            };
            (seed.riasec_type, profile)
        })
        .collect()
}
