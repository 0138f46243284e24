use crate::quiz::domain::{CareerDetail, RelatedSubtype, RiasecType};

use RiasecType::{A, C, E, I, R, S};

type CareerSeed = (
    &'static str,
    RiasecType,
    &'static str,
    &'static str,
    &'static str,
    [(&'static str, RiasecType); 4],
);

const SEEDS: &[CareerSeed] = &[
    (
        "Engenharia",
        R,
        "Projeta, constrói e otimiza sistemas, estruturas e processos, transformando ideias em soluções concretas.",
        "Resolução de problemas complexos, pensamento analítico e soluções práticas para desafios reais.",
        "Alta exigência técnica, pressão por prazos e responsabilidade elevada.",
        [("REALISTA", R), ("EXECUÇÃO", R), ("PRODUÇÃO", R), ("RACIOCÍNIO", I)],
    ),
    (
        "Mecânica",
        R,
        "Diagnostica, repara e mantém máquinas e veículos funcionando com segurança e eficiência.",
        "Trabalho prático e tangível, alta demanda e autonomia profissional.",
        "Esforço físico intenso, exposição a riscos e atualização tecnológica constante.",
        [("MANUTENÇÃO", R), ("FERRAMENTAS", R), ("OPERAÇÃO", R), ("DIAGNÓSTICO", I)],
    ),
    (
        "Agricultura",
        R,
        "Cultiva alimentos e gerencia propriedades rurais combinando técnica tradicional e tecnologia.",
        "Contato com a natureza, independência e contribuição essencial para a sociedade.",
        "Dependência climática, sazonalidade de renda e trabalho físico intenso.",
        [("CONSTÂNCIA", R), ("PRODUÇÃO", R), ("RESISTÊNCIA", R), ("ROTINA", R)],
    ),
    (
        "Construção Civil",
        R,
        "Edifica casas, prédios e infraestruturas, materializando projetos em estruturas sólidas.",
        "Resultados visíveis e duradouros, mercado amplo e trabalho em equipe.",
        "Riscos de segurança, exposição ao clima e prazos apertados.",
        [("EXECUÇÃO", R), ("OPERAÇÃO", R), ("SEGURANÇA", R), ("ESTRUTURA", C)],
    ),
    (
        "Eletricista",
        R,
        "Instala, mantém e repara sistemas elétricos residenciais e industriais.",
        "Alta demanda, autonomia e trabalho técnico especializado.",
        "Riscos elétricos, trabalho em alturas e certificações obrigatórias.",
        [("MANUTENÇÃO", R), ("FERRAMENTAS", R), ("SEGURANÇA", R), ("PRECISÃO", C)],
    ),
    (
        "Ciência",
        I,
        "Investiga fenômenos naturais e desenvolve teorias que expandem o conhecimento humano.",
        "Descobertas inovadoras e ambiente intelectual estimulante.",
        "Resultados a longo prazo e competição por financiamento.",
        [("PESQUISA", I), ("TEORIA", I), ("CURIOSIDADE", I), ("OBSERVAÇÃO", I)],
    ),
    (
        "Pesquisa",
        I,
        "Coleta, analisa e interpreta dados para gerar conhecimento aplicável.",
        "Aprofundamento intelectual, autonomia e flexibilidade temática.",
        "Processos demorados, burocracia e remuneração variável.",
        [("ANÁLISE", I), ("DIAGNÓSTICO", I), ("ESTUDO", I), ("DADOS", C)],
    ),
    (
        "Medicina",
        I,
        "Diagnostica e trata doenças, unindo conhecimento científico e cuidado humano.",
        "Impacto direto na vida das pessoas e aprendizado contínuo.",
        "Formação longa, carga emocional e plantões extensos.",
        [("DIAGNÓSTICO", I), ("ANÁLISE", I), ("OBSERVAÇÃO", I), ("CUIDADO", S)],
    ),
    (
        "Tecnologia",
        I,
        "Desenvolve sistemas e soluções digitais que conectam pessoas e automatizam processos.",
        "Mercado aquecido, trabalho remoto e impacto global.",
        "Evolução acelerada, sedentarismo e risco de burnout.",
        [("CURIOSIDADE", I), ("RACIOCÍNIO", I), ("LÓGICA", I), ("INOVAÇÃO", A)],
    ),
    (
        "Análise de Dados",
        I,
        "Organiza e interpreta grandes volumes de informação para orientar decisões.",
        "Alta demanda, versatilidade setorial e decisões baseadas em evidências.",
        "Trabalho repetitivo de limpeza de dados e complexidade estatística.",
        [("ANÁLISE", I), ("PESQUISA", I), ("LÓGICA", I), ("DADOS", C)],
    ),
    (
        "Design",
        A,
        "Cria soluções visuais que comunicam, encantam e resolvem problemas.",
        "Expressão criativa, versatilidade e possibilidade de trabalho freelancer.",
        "Subjetividade das avaliações e concorrência elevada.",
        [("EXPRESSÃO", A), ("CRIATIVIDADE", A), ("ESTÉTICA", A), ("INOVAÇÃO", A)],
    ),
    (
        "Música",
        A,
        "Cria, interpreta e produz obras sonoras que emocionam e conectam pessoas.",
        "Expressão emocional profunda e liberdade criativa.",
        "Instabilidade financeira e mercado volátil.",
        [("EXPRESSÃO", A), ("IMAGINAÇÃO", A), ("IDENTIDADE", A), ("EXPERIÊNCIAS", A)],
    ),
    (
        "Escrita",
        A,
        "Transforma ideias e histórias em textos que informam, inspiram e transformam.",
        "Autonomia criativa, trabalho remoto e impacto cultural.",
        "Renda irregular, bloqueio criativo e solidão no processo.",
        [("IMAGINAÇÃO", A), ("CRIATIVIDADE", A), ("IDENTIDADE", A), ("COMUNICAÇÃO", S)],
    ),
    (
        "Artes Visuais",
        A,
        "Cria obras que provocam reflexão e emoção através de formas, cores e texturas.",
        "Liberdade de expressão total e originalidade.",
        "Mercado restrito e renda instável.",
        [("ESTÉTICA", A), ("ESTILO", A), ("EXPERIÊNCIAS", A), ("INTUIÇÃO", A)],
    ),
    (
        "Publicidade",
        A,
        "Cria campanhas que comunicam, persuadem e constroem marcas memoráveis.",
        "Criatividade aplicada, dinâmica de trabalho e impacto comercial.",
        "Pressão por resultados e prazos curtos.",
        [("CRIATIVIDADE", A), ("INOVAÇÃO", A), ("MUDANÇA", A), ("PERSUASÃO", E)],
    ),
    (
        "Educação",
        S,
        "Forma cidadãos, transmite conhecimento e inspira transformações sociais.",
        "Impacto social profundo e realização pessoal.",
        "Baixa remuneração em muitos contextos e desgaste emocional.",
        [("ENSINO", S), ("COMUNICAÇÃO", S), ("EMPATIA", S), ("COOPERAÇÃO", S)],
    ),
    (
        "Psicologia",
        S,
        "Auxilia pessoas a compreenderem emoções e relações, promovendo saúde mental.",
        "Ajuda direta às pessoas e demanda crescente.",
        "Carga emocional elevada e formação contínua necessária.",
        [("ESCUTA", S), ("EMPATIA", S), ("CUIDADO", S), ("OBSERVAÇÃO", I)],
    ),
    (
        "Serviço Social",
        S,
        "Defende direitos e promove a inclusão de populações vulneráveis.",
        "Impacto social direto e senso de propósito.",
        "Condições de trabalho difíceis e sobrecarga emocional.",
        [("AJUDA", S), ("GRUPO", S), ("COLABORAÇÃO", S), ("APOIO", S)],
    ),
    (
        "Saúde",
        S,
        "Cuida do bem-estar físico e emocional das pessoas com prevenção e tratamento.",
        "Propósito claro e estabilidade de emprego.",
        "Horários irregulares e cansaço físico.",
        [("CUIDADO", S), ("EMPATIA", S), ("APOIO", S), ("ENSINO", S)],
    ),
    (
        "RH",
        S,
        "Gerencia pessoas, desenvolve talentos e constrói culturas organizacionais saudáveis.",
        "Influência na cultura organizacional e desenvolvimento de pessoas.",
        "Mediação de conflitos e decisões difíceis.",
        [("COMUNICAÇÃO", S), ("GRUPO", S), ("ESCUTA", S), ("LIDERANÇA", E)],
    ),
    (
        "Administração",
        E,
        "Planeja e dirige recursos para alcançar objetivos organizacionais.",
        "Visão ampla de negócios e oportunidades de liderança.",
        "Mercado saturado e pressão por resultados.",
        [("LIDERANÇA", E), ("DECISÃO", E), ("VISÃO", E), ("ORGANIZAÇÃO", C)],
    ),
    (
        "Vendas",
        E,
        "Conecta produtos e serviços às necessidades dos clientes.",
        "Potencial de ganhos e dinamismo.",
        "Pressão por metas e rejeição constante.",
        [("PERSUASÃO", E), ("INFLUÊNCIA", E), ("COMPETIÇÃO", E), ("AMBIÇÃO", E)],
    ),
    (
        "Marketing",
        E,
        "Cria estratégias para posicionar marcas e conquistar mercados.",
        "Criatividade estratégica e mercado dinâmico.",
        "Mudanças constantes de tendência e concorrência.",
        [("INFLUÊNCIA", E), ("EXPOSIÇÃO", E), ("RISCO", E), ("CRIATIVIDADE", A)],
    ),
    (
        "Direito",
        E,
        "Defende interesses, resolve conflitos e garante a aplicação da justiça.",
        "Prestígio profissional e diversidade de áreas.",
        "Formação longa e pressão por prazos processuais.",
        [("DECISÃO", E), ("PERSUASÃO", E), ("AMBIÇÃO", E), ("REGRAS", C)],
    ),
    (
        "Gestão",
        E,
        "Coordena equipes, processos e recursos para atingir metas.",
        "Posição de influência e visão sistêmica.",
        "Alta responsabilidade e decisões sob pressão.",
        [("LIDERANÇA", E), ("INICIATIVA", E), ("VISÃO", E), ("PLANEJAMENTO", C)],
    ),
    (
        "Contabilidade",
        C,
        "Registra e interpreta informações financeiras garantindo conformidade legal.",
        "Demanda constante e estabilidade profissional.",
        "Trabalho repetitivo e pressão em períodos fiscais.",
        [("DADOS", C), ("CONTROLE", C), ("PRECISÃO", C), ("DOCUMENTAÇÃO", C)],
    ),
    (
        "Finanças",
        C,
        "Gerencia recursos monetários, investimentos e riscos financeiros.",
        "Altos salários e impacto estratégico.",
        "Alta pressão e volatilidade de mercados.",
        [("ORGANIZAÇÃO", C), ("ESTRUTURA", C), ("DADOS", C), ("RISCO", E)],
    ),
    (
        "Administração",
        C,
        "Mantém a engrenagem operacional da empresa funcionando com eficiência.",
        "Visão holística da empresa e estabilidade.",
        "Burocracia e gestão de recursos limitados.",
        [("ORGANIZAÇÃO", C), ("CONTROLE", C), ("REGRAS", C), ("CONFORMIDADE", C)],
    ),
    (
        "Logística",
        C,
        "Planeja e coordena o fluxo de produtos do fornecedor ao consumidor final.",
        "Mercado em crescimento e impacto direto nos custos.",
        "Imprevistos operacionais e horários irregulares.",
        [("ESTRUTURA", C), ("PLANEJAMENTO", C), ("PADRÃO", C), ("OPERAÇÃO", R)],
    ),
    (
        "Auditoria",
        C,
        "Examina processos, contas e controles para garantir conformidade e transparência.",
        "Remuneração atrativa e demanda regulatória constante.",
        "Trabalho minucioso e viagens frequentes.",
        [("PRECISÃO", C), ("REGRAS", C), ("CONFORMIDADE", C), ("ANÁLISE", I)],
    ),
];

pub fn default_careers() -> Vec<CareerDetail> {
    SEEDS
        .iter()
        .map(
            |&(name, riasec_type, description, strengths, weaknesses, related)| CareerDetail {
                name: name.to_string(),
                riasec_type,
                description: description.to_string(),
                strengths: strengths.to_string(),
                weaknesses: weaknesses.to_string(),
                related_subtypes: related
                    .iter()
                    .map(|&(label, owner)| RelatedSubtype::new(label, owner))
                    .collect(),
            },
        )
        .collect()
}
